//! Builds minimal TrueType binaries for tests.
//!
//! The fonts carry only the tables `ttf-parser` needs for glyph lookup
//! (`cmap`, `head`, `hhea`, `hmtx`, `maxp`). Every cmap subtable is format 0,
//! so mapped code points and glyph ids must both be below 256.

/// Unicode platform, BMP encoding.
pub const UNICODE_BMP: (u16, u16) = (0, 3);

struct Subtable {
    platform: u16,
    encoding: u16,
    glyph_ids: [u8; 256],
}

/// Incrementally describes a synthetic font. Glyph 0 (`.notdef`) always exists.
pub struct TestFontBuilder {
    units_per_em: u16,
    advances: Vec<u16>,
    subtables: Vec<Subtable>,
}

impl Default for TestFontBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFontBuilder {
    /// A font with a 500-unit `.notdef` and nothing else.
    pub fn new() -> Self {
        Self {
            units_per_em: 1000,
            advances: vec![500],
            subtables: Vec::new(),
        }
    }

    pub fn notdef_width(mut self, width: u16) -> Self {
        self.advances[0] = width;
        self
    }

    /// Appends a glyph with the given advance width. Its id is the current
    /// glyph count.
    pub fn glyph(mut self, width: u16) -> Self {
        self.advances.push(width);
        self
    }

    /// Maps `ch` to `glyph_id` in the Unicode BMP subtable.
    pub fn map(self, ch: char, glyph_id: u16) -> Self {
        self.map_in(UNICODE_BMP, ch, glyph_id)
    }

    /// Maps `ch` to `glyph_id` in the `(platform, encoding)` subtable,
    /// creating the subtable on first use.
    pub fn map_in(mut self, (platform, encoding): (u16, u16), ch: char, glyph_id: u16) -> Self {
        let code = u8::try_from(u32::from(ch)).expect("format 0 covers code points below 256");
        let glyph = u8::try_from(glyph_id).expect("format 0 stores glyph ids below 256");

        let position = self
            .subtables
            .iter()
            .position(|s| s.platform == platform && s.encoding == encoding);
        let index = match position {
            Some(index) => index,
            None => {
                self.subtables.push(Subtable {
                    platform,
                    encoding,
                    glyph_ids: [0; 256],
                });
                self.subtables.len() - 1
            }
        };
        self.subtables[index].glyph_ids[usize::from(code)] = glyph;
        self
    }

    fn num_glyphs(&self) -> u16 {
        u16::try_from(self.advances.len()).expect("glyph count fits in u16")
    }

    fn cmap(&self) -> Vec<u8> {
        const SUBTABLE_LEN: usize = 6 + 256;
        let count = self.subtables.len();
        let mut out = Vec::new();
        push_u16(&mut out, 0);
        push_u16(&mut out, count as u16);
        for (i, subtable) in self.subtables.iter().enumerate() {
            push_u16(&mut out, subtable.platform);
            push_u16(&mut out, subtable.encoding);
            push_u32(&mut out, (4 + 8 * count + SUBTABLE_LEN * i) as u32);
        }
        for subtable in &self.subtables {
            push_u16(&mut out, 0); // format
            push_u16(&mut out, SUBTABLE_LEN as u16);
            push_u16(&mut out, 0); // language
            out.extend_from_slice(&subtable.glyph_ids);
        }
        out
    }

    fn head(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(54);
        push_u32(&mut out, 0x0001_0000); // version
        push_u32(&mut out, 0x0001_0000); // font revision
        push_u32(&mut out, 0); // checksum adjustment
        push_u32(&mut out, 0x5F0F_3CF5); // magic
        push_u16(&mut out, 0); // flags
        push_u16(&mut out, self.units_per_em);
        out.extend_from_slice(&[0; 16]); // created, modified
        out.extend_from_slice(&[0; 8]); // bounding box
        push_u16(&mut out, 0); // mac style
        push_u16(&mut out, 8); // lowest rec ppem
        push_u16(&mut out, 2); // font direction hint
        push_u16(&mut out, 0); // index to loc format
        push_u16(&mut out, 0); // glyph data format
        out
    }

    fn hhea(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(36);
        push_u32(&mut out, 0x0001_0000); // version
        push_u16(&mut out, 800); // ascender
        push_u16(&mut out, (-200i16) as u16); // descender
        push_u16(&mut out, 0); // line gap
        push_u16(&mut out, self.advances.iter().copied().max().unwrap_or(0));
        out.extend_from_slice(&[0; 6]); // min lsb, min rsb, x max extent
        push_u16(&mut out, 1); // caret slope rise
        out.extend_from_slice(&[0; 4]); // caret slope run, caret offset
        out.extend_from_slice(&[0; 8]); // reserved
        push_u16(&mut out, 0); // metric data format
        push_u16(&mut out, self.num_glyphs()); // number of h metrics
        out
    }

    fn hmtx(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.advances.len() * 4);
        for &advance in &self.advances {
            push_u16(&mut out, advance);
            push_u16(&mut out, 0); // left side bearing
        }
        out
    }

    fn maxp(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6);
        push_u32(&mut out, 0x0000_5000);
        push_u16(&mut out, self.num_glyphs());
        out
    }

    /// Serializes the font.
    pub fn build(&self) -> Vec<u8> {
        // Table records must be sorted by tag.
        let tables: [(&[u8; 4], Vec<u8>); 5] = [
            (b"cmap", self.cmap()),
            (b"head", self.head()),
            (b"hhea", self.hhea()),
            (b"hmtx", self.hmtx()),
            (b"maxp", self.maxp()),
        ];

        let num_tables = tables.len() as u16;
        let mut out = Vec::new();
        push_u32(&mut out, 0x0001_0000); // sfnt version
        push_u16(&mut out, num_tables);
        push_u16(&mut out, 64); // search range
        push_u16(&mut out, 2); // entry selector
        push_u16(&mut out, num_tables * 16 - 64); // range shift

        let mut offset = 12 + 16 * tables.len();
        for (tag, data) in &tables {
            out.extend_from_slice(*tag);
            push_u32(&mut out, 0); // checksum
            push_u32(&mut out, offset as u32);
            push_u32(&mut out, data.len() as u32);
            offset += padded_len(data.len());
        }
        for (_, data) in &tables {
            out.extend_from_slice(data);
            out.resize(out.len() + padded_len(data.len()) - data.len(), 0);
        }
        out
    }
}

fn padded_len(len: usize) -> usize {
    len.div_ceil(4) * 4
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// `.notdef` 500 units, `A` -> glyph 1 at 600 units, `B` -> glyph 7 which
/// does not exist.
pub fn sample_font() -> Vec<u8> {
    TestFontBuilder::new()
        .glyph(600)
        .map('A', 1)
        .map('B', 7)
        .build()
}
