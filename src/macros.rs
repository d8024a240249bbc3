/// Derives the borrowed and compound-assignment forms of a binary operator
/// from its by-value implementation.
macro_rules! forward_binop {
    ($t: ident, $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl std::ops::$imp<&$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> Self::Output {
                std::ops::$imp::$method(self.clone(), rhs.clone())
            }
        }

        impl std::ops::$imp<&$t> for $t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> Self::Output {
                std::ops::$imp::$method(self, rhs.clone())
            }
        }

        impl std::ops::$imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> Self::Output {
                std::ops::$imp::$method(self.clone(), rhs)
            }
        }

        impl std::ops::$imp_assign for $t {
            fn $method_assign(&mut self, rhs: $t) {
                *self = std::ops::$imp::$method(std::mem::take(self), rhs);
            }
        }

        impl std::ops::$imp_assign<&$t> for $t {
            fn $method_assign(&mut self, rhs: &$t) {
                *self = std::ops::$imp::$method(std::mem::take(self), rhs.clone());
            }
        }
    };
}
