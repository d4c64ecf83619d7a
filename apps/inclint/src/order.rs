//! Ordering rules for a single include block.

/// Token that may open a block regardless of its alphabetical position.
pub const SYS_TYPES: &str = "sys/types.h";

/// Block ordering rules.
///
/// A block is ordered when, after dropping a first element that appears in
/// `leading`, the remaining tokens are in byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRules {
    pub leading: Vec<String>,
}

impl Default for OrderRules {
    fn default() -> Self {
        Self {
            leading: vec![SYS_TYPES.to_string()],
        }
    }
}

impl OrderRules {
    pub fn new(leading: Vec<String>) -> Self {
        Self { leading }
    }

    pub fn is_ordered<S: AsRef<str>>(&self, block: &[S]) -> bool {
        let rest = match block.split_first() {
            Some((first, rest)) if self.leading.iter().any(|l| l == first.as_ref()) => rest,
            _ => block,
        };
        rest.windows(2)
            .all(|pair| pair[0].as_ref() <= pair[1].as_ref())
    }
}

/// Check a block with the default rules (`sys/types.h` may lead).
pub fn is_block_ordered<S: AsRef<str>>(block: &[S]) -> bool {
    OrderRules::default().is_ordered(block)
}
