use crate::core::params::InstallParameters;
use crate::stages::identity::SystemIdentity;
use crate::stages::platform::PlatformKind;
use crate::stages::runtime::RuntimeCandidate;

/// Everything the later stages need, resolved up front and threaded through
/// explicitly. No stage reads ambient process state.
#[derive(Debug, Clone)]
pub struct InstallContext {
    pub params: InstallParameters,
    pub platform: PlatformKind,
    pub identity: SystemIdentity,
    pub runtime: RuntimeCandidate,
}
