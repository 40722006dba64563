/// Items per full stack
pub const STACK_SIZE: u32 = 64;

/// Upper bound on any single request, forty stacks
pub const MAX_QUANTITY: u32 = STACK_SIZE * 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    /// `m`: whole stacks
    Stacks,
    /// `d`: a stack divided into n parts
    Divisor,
    /// `s`: a stack short by n
    Short,
    Plain,
}

impl Flag {
    fn from_byte(b: Option<u8>) -> Self {
        match b {
            Some(b'm') => Flag::Stacks,
            Some(b'd') => Flag::Divisor,
            Some(b's') => Flag::Short,
            _ => Flag::Plain,
        }
    }

    fn apply(self, n: u64) -> u64 {
        let stack = STACK_SIZE as u64;
        match self {
            Flag::Plain => n,
            Flag::Stacks => n.saturating_mul(stack),
            Flag::Divisor => (stack as f64 / n.max(1) as f64).round_ties_even() as u64,
            Flag::Short => stack.saturating_sub(n).max(1),
        }
    }
}

/// Whether a token reads as a quantity: leading digits, optionally flagged
pub fn is_quantifier(token: &str) -> bool {
    token.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Sum every `digits[flag]` term in `token`, capped at [`MAX_QUANTITY`]
///
/// `"8m2d"` is two terms: eight stacks plus half a stack.
pub fn parse_quantity(token: &str) -> u32 {
    let bytes = token.as_bytes();
    let mut total: u64 = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let mut n: u64 = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            n = n.saturating_mul(10).saturating_add((bytes[i] - b'0') as u64);
            i += 1;
        }

        let flag = match bytes.get(i) {
            Some(b) if b.is_ascii_lowercase() => {
                i += 1;
                Some(*b)
            }
            _ => None,
        };

        total = total.saturating_add(Flag::from_byte(flag).apply(n));
    }

    total.min(MAX_QUANTITY as u64) as u32
}
