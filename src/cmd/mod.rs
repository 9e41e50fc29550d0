mod check;
mod emit;
mod init;
mod new;
mod show;

pub use check::check;
pub use emit::emit;
pub use init::init;
pub use new::new;
pub use show::show;
