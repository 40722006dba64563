use crate::console::statement::Statement;
use crate::validation::quantity::{MAX_QUANTITY, STACK_SIZE};

/// Split an item grant into console statements of at most one stack each
///
/// Requests above [`MAX_QUANTITY`] are clamped. Full stacks come first and
/// any remainder is granted last.
pub fn grant(user: &str, item: &str, quantity: u32) -> Vec<Statement> {
    let give = |count: u32| Statement::Give {
        target: user.to_string(),
        item: item.to_string(),
        count,
    };

    if quantity <= STACK_SIZE {
        return vec![give(quantity)];
    }

    let quantity = quantity.min(MAX_QUANTITY);
    let stacks = quantity / STACK_SIZE;
    let remainder = quantity % STACK_SIZE;

    let mut statements = Vec::with_capacity(stacks as usize + 1);
    statements.extend((0..stacks).map(|_| give(STACK_SIZE)));
    if remainder > 0 {
        statements.push(give(remainder));
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(statements: &[Statement]) -> Vec<u32> {
        statements
            .iter()
            .map(|s| match s {
                Statement::Give { count, .. } => *count,
                other => panic!("unexpected statement {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_single_line_up_to_a_stack() {
        for q in 0..=STACK_SIZE {
            let statements = grant("Steve", "264", q);
            assert_eq!(counts(&statements), vec![q]);
        }
    }

    #[test]
    fn test_full_stacks_then_remainder() {
        let statements = grant("Steve", "264", 150);
        assert_eq!(counts(&statements), vec![64, 64, 22]);
        assert_eq!(statements[0].to_string(), "give Steve 264 64");
        assert_eq!(statements[2].to_string(), "give Steve 264 22");
    }

    #[test]
    fn test_exact_multiple_has_no_remainder() {
        assert_eq!(counts(&grant("Steve", "1", 128)), vec![64, 64]);
    }

    #[test]
    fn test_totals_sum_to_request() {
        for q in [65, 100, 640, 1000, 2559, 2560] {
            let statements = grant("Steve", "1", q);
            let c = counts(&statements);
            assert_eq!(c.iter().sum::<u32>(), q);
            assert_eq!(c.len() as u32, q / 64 + u32::from(q % 64 != 0));
        }
    }

    #[test]
    fn test_clamped_above_max() {
        assert_eq!(grant("Steve", "1", 10_000), grant("Steve", "1", MAX_QUANTITY));
        assert_eq!(grant("Steve", "1", 10_000).len(), 40);
    }
}
