/// How much the actions trust the identity token alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountConfirmation {
    /// A verified identity token is proof of a live upstream account
    #[default]
    TokenOnly,
    /// Additionally look the account up by email at the identity provider
    Upstream,
}
