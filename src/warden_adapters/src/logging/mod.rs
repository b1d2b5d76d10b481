pub mod in_memory_security_log;
pub mod tracing_security_log;

pub use in_memory_security_log::InMemorySecurityLog;
pub use tracing_security_log::TracingSecurityLog;
