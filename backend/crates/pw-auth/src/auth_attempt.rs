/// Which authentication action an attempt is for. Each action has its own
/// budget per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthAttempt {
    SignUp,
    SignIn,
}
