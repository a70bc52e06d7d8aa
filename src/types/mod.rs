mod user;

pub use user::{Dob, Login, Name, Picture, User};
