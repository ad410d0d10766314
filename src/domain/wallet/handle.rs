use std::ptr;
use std::rc::Rc;

/// Identity of a registered value.
///
/// Two handles are the same wallet only when they refer to the same object.
/// Equal contents (for instance two wallets reporting the same name) do not
/// make two handles the same.
pub trait Handle: Clone + 'static {
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized + 'static> Handle for Rc<T> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(Rc::as_ptr(self), Rc::as_ptr(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_reference_is_same_handle() {
        let a: Rc<str> = Rc::from("phantom");
        let b = a.clone();
        assert!(a.same(&b));
    }

    #[test]
    fn test_equal_contents_are_distinct_handles() {
        let a: Rc<str> = Rc::from("phantom");
        let b: Rc<str> = Rc::from("phantom");
        assert_eq!(a, b);
        assert!(!a.same(&b));
    }
}
