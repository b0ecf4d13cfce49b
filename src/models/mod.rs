pub mod account;
pub mod alumni;
pub mod college;
pub mod student;

pub use account::*;
pub use alumni::*;
pub use college::*;
pub use student::*;
