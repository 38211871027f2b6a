use std::fmt;

/// The four arithmetic operators of the numbers round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Combine `larger` with `smaller`, or `None` when the rules forbid it:
    /// differences must stay strictly positive and divisions must be exact.
    #[inline]
    pub fn apply(self, larger: u64, smaller: u64) -> Option<u64> {
        match self {
            Operation::Add => larger.checked_add(smaller),
            Operation::Subtract => larger.checked_sub(smaller).filter(|&difference| difference > 0),
            Operation::Multiply => larger.checked_mul(smaller),
            Operation::Divide => {
                if smaller != 0 && larger >= smaller && larger % smaller == 0 {
                    Some(larger / smaller)
                } else {
                    None
                }
            }
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests_operation {
    use super::Operation;

    #[test]
    fn test_add_and_multiply_always_valid() {
        assert_eq!(Operation::Add.apply(7, 2), Some(9));
        assert_eq!(Operation::Multiply.apply(100, 4), Some(400));
        assert_eq!(Operation::Multiply.apply(1, 1), Some(1));
    }

    #[test]
    fn test_subtract_rejects_zero() {
        assert_eq!(Operation::Subtract.apply(9, 4), Some(5));
        assert_eq!(Operation::Subtract.apply(5, 5), None);
        assert_eq!(Operation::Subtract.apply(4, 9), None);
    }

    #[test]
    fn test_divide_exact_only() {
        assert_eq!(Operation::Divide.apply(100, 4), Some(25));
        assert_eq!(Operation::Divide.apply(7, 2), None);
        assert_eq!(Operation::Divide.apply(2, 7), None);
        assert_eq!(Operation::Divide.apply(8, 1), Some(8));
        assert_eq!(Operation::Divide.apply(8, 0), None);
    }

    #[test]
    fn test_symbols() {
        let symbols: String = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+-*/");
        assert_eq!(format!("{}", Operation::Divide), "/");
    }
}
