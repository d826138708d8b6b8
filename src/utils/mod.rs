pub mod index_type;

pub(crate) mod sealed {
    /// Supertrait that keeps [`IndexType`](crate::IndexType) and
    /// [`NodeStorage`](crate::NodeStorage) implementable only inside this
    /// crate. The deque's unchecked slot reads rely on both.
    pub trait Sealed {}
}
