mod condition;
mod context;
mod throttle;

pub use condition::{classify, evaluate, Condition, Evaluation};
pub use context::AlertContext;
pub use throttle::NotificationThrottle;
