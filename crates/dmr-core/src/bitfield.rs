use core::fmt;

/// Widest field `BitBuffer::get_int` can pack into a u64.
pub const MAX_FIELD_BITS: usize = 64;

/// A named field of a fixed-layout PDU, given as an ordered list of absolute bit
/// positions. The first position is the most significant bit of the value.
///
/// Field maps are static per-variant tables. They are checked once, either by a
/// `const` assertion next to the table (see `field_map_is_valid`) or at startup
/// through `validate_field_map`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub name: &'static str,
    pub positions: &'static [u16],
}

impl BitField {
    pub const fn new(name: &'static str, positions: &'static [u16]) -> Self {
        BitField { name, positions }
    }

    /// Number of bits in this field
    pub const fn width(&self) -> usize {
        self.positions.len()
    }

    /// Check this field on its own against a record of `record_len` bits.
    pub fn validate(&self, record_len: usize) -> Result<(), FieldMapErr> {
        if self.positions.is_empty() {
            return Err(FieldMapErr::Empty { field: self.name });
        }
        if self.positions.len() > MAX_FIELD_BITS {
            return Err(FieldMapErr::TooWide { field: self.name, width: self.positions.len() });
        }
        for &pos in self.positions {
            if pos as usize >= record_len {
                return Err(FieldMapErr::OutOfRange { field: self.name, position: pos, record_len });
            }
        }
        // A field may not address the same bit twice
        for (i, &a) in self.positions.iter().enumerate() {
            if self.positions[i + 1..].contains(&a) {
                return Err(FieldMapErr::Overlap { first: self.name, second: self.name, position: a });
            }
        }
        Ok(())
    }

    /// True if every position of this field lies within a record of `record_len` bits.
    pub const fn fits(&self, record_len: usize) -> bool {
        let mut i = 0;
        while i < self.positions.len() {
            if self.positions[i] as usize >= record_len {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => write!(f, "{}[{}..={}]", self.name, first, last),
            _ => write!(f, "{}[]", self.name),
        }
    }
}

/// Generate `N` consecutive bit positions starting at `start`, for use in const field tables:
/// `const KEY_ID_BITS: [u16; 8] = span(16);`
pub const fn span<const N: usize>(start: u16) -> [u16; N] {
    let mut out = [0u16; N];
    let mut i = 0;
    while i < N {
        out[i] = start + i as u16;
        i += 1;
    }
    out
}

/// Const counterpart of `validate_field_map`, meant for compile-time assertions:
/// `const _: () = assert!(field_map_is_valid(FIELDS, 72));`
pub const fn field_map_is_valid(map: &[BitField], record_len: usize) -> bool {
    let mut f = 0;
    while f < map.len() {
        let field = &map[f];
        if field.positions.is_empty() || field.positions.len() > MAX_FIELD_BITS || !field.fits(record_len) {
            return false;
        }
        // Compare against all positions of this field and of the fields after it
        let mut i = 0;
        while i < field.positions.len() {
            let pos = field.positions[i];
            let mut g = f;
            while g < map.len() {
                let other = map[g].positions;
                let mut j = if g == f { i + 1 } else { 0 };
                while j < other.len() {
                    if other[j] == pos {
                        return false;
                    }
                    j += 1;
                }
                g += 1;
            }
            i += 1;
        }
        f += 1;
    }
    true
}

/// Validate a complete field map: each field must be valid on its own, and no two
/// fields may share a bit position.
pub fn validate_field_map(map: &[BitField], record_len: usize) -> Result<(), FieldMapErr> {
    for field in map {
        field.validate(record_len)?;
    }
    for (i, a) in map.iter().enumerate() {
        for b in &map[i + 1..] {
            if let Some(&pos) = a.positions.iter().find(|p| b.positions.contains(p)) {
                return Err(FieldMapErr::Overlap { first: a.name, second: b.name, position: pos });
            }
        }
    }
    Ok(())
}

/// Misconfigured field map. Always a programming error, never caused by received data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMapErr {
    Empty { field: &'static str },
    TooWide { field: &'static str, width: usize },
    OutOfRange { field: &'static str, position: u16, record_len: usize },
    Overlap { first: &'static str, second: &'static str, position: u16 },
}

impl fmt::Display for FieldMapErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldMapErr::Empty { field } => write!(f, "field {} has no bit positions", field),
            FieldMapErr::TooWide { field, width } => {
                write!(f, "field {} is {} bits wide, max is {}", field, width, MAX_FIELD_BITS)
            }
            FieldMapErr::OutOfRange { field, position, record_len } => {
                write!(f, "field {} addresses bit {} beyond record length {}", field, position, record_len)
            }
            FieldMapErr::Overlap { first, second, position } => {
                write!(f, "fields {} and {} both address bit {}", first, second, position)
            }
        }
    }
}

impl std::error::Error for FieldMapErr {}
