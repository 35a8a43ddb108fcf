/// Shared contract across every tag of one variant type.
///
/// The `variant!` macro implements this for each generated enum. All
/// instances of all tags share the enum as their common polymorphic type;
/// this trait adds the introspective view of the tag set.
pub trait Variant {
    /// Tag names in declaration order.
    const TAGS: &'static [&'static str];

    /// The tag this instance was constructed with.
    ///
    /// Fixed at construction; there is no way to retag an instance.
    fn tag(&self) -> &'static str;
}
