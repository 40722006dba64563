use crate::core::error::ValidationError;
use crate::validation::quantity::{is_quantifier, parse_quantity};

/// An item phrase and the quantity requested for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemArgs {
    pub phrase: String,
    pub quantity: u32,
}

/// Separate an item phrase from an optional trailing quantifier
///
/// A lone token is always the phrase. With several tokens the last one is
/// taken as the quantity only if it reads as a quantifier.
pub fn split_item_args(
    default_quantity: u32,
    args: &[String],
) -> Result<ItemArgs, ValidationError> {
    match args {
        [] => Err(ValidationError::MissingParameter("item".to_string())),
        [only] => Ok(ItemArgs {
            phrase: only.clone(),
            quantity: default_quantity,
        }),
        [head @ .., last] if is_quantifier(last) => Ok(ItemArgs {
            phrase: head.join(" "),
            quantity: parse_quantity(last),
        }),
        all => Ok(ItemArgs {
            phrase: all.join(" "),
            quantity: default_quantity,
        }),
    }
}

/// Positional argument `index`, or a missing-argument error naming it
pub fn require<'a>(
    args: &'a [String],
    index: usize,
    name: &str,
) -> Result<&'a str, ValidationError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| ValidationError::MissingParameter(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_single_token_uses_default() {
        let parsed = split_item_args(1, &tokens("diamond")).unwrap();
        assert_eq!(parsed.phrase, "diamond");
        assert_eq!(parsed.quantity, 1);
    }

    #[test]
    fn test_single_numeric_token_is_the_item() {
        let parsed = split_item_args(1, &tokens("264")).unwrap();
        assert_eq!(parsed.phrase, "264");
        assert_eq!(parsed.quantity, 1);
    }

    #[test]
    fn test_trailing_quantifier_is_stripped() {
        let parsed = split_item_args(1, &tokens("diamond sword 2m")).unwrap();
        assert_eq!(parsed.phrase, "diamond sword");
        assert_eq!(parsed.quantity, 128);
    }

    #[test]
    fn test_trailing_word_joins_phrase() {
        let parsed = split_item_args(30, &tokens("gold ingot")).unwrap();
        assert_eq!(parsed.phrase, "gold ingot");
        assert_eq!(parsed.quantity, 30);
    }

    #[test]
    fn test_empty_args_are_missing() {
        assert_eq!(
            split_item_args(1, &[]),
            Err(ValidationError::MissingParameter("item".to_string()))
        );
    }

    #[test]
    fn test_require() {
        let args = tokens("Alex");
        assert_eq!(require(&args, 0, "player"), Ok("Alex"));
        assert_eq!(
            require(&args, 1, "label"),
            Err(ValidationError::MissingParameter("label".to_string()))
        );
    }
}
