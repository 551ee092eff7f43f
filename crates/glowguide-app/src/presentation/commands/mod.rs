mod analysis;
mod assessment;
mod onboarding;
mod profile;

pub use analysis::*;
pub use assessment::*;
pub use onboarding::*;
pub use profile::*;
