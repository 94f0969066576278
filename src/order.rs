/// Sort direction applied on top of the configured comparator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Comparator order
    #[default]
    Asc,
    /// Reversed comparator order
    Desc,
}
