mod home;
pub use home::Home;

mod shell;
pub use shell::Shell;
