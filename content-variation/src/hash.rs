const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Streaming form of [`stable_hash`].
///
/// Feeding `"Seattle"` then `"hero"` yields exactly the hash of `"Seattlehero"`,
/// which lets the selectors salt an identifier without allocating the
/// concatenated key.
#[derive(Debug, Clone)]
pub struct StableHasher {
    state: u64,
}

impl StableHasher {
    pub fn new() -> Self {
        StableHasher {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Folds every code point of `value` into the accumulator.
    pub fn write_str(&mut self, value: &str) -> &mut Self {
        for ch in value.chars() {
            self.state ^= u64::from(ch);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
        self
    }

    /// Folds the decimal rendering of `value`, so slot `12` hashes like the text `"12"`.
    pub fn write_decimal(&mut self, value: usize) -> &mut Self {
        self.write_str(&value.to_string())
    }

    pub fn finish(&self) -> u64 {
        avalanche(self.state)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a string to a non-negative integer, identically on every platform and every run.
///
/// FNV-1a over code points followed by a 64-bit finalizer. Selectors reduce the result
/// modulo small pool sizes, so the low bits of "Kent" and "Kent2" must already differ.
pub fn stable_hash(value: &str) -> u64 {
    StableHasher::new().write_str(value).finish()
}

fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}
