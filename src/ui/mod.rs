pub mod architecture;
pub mod common;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icon;
pub mod matrix_background;
pub mod pages;
pub mod quote_form;

pub use architecture::Architecture;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icon::{GithubIcon, Icon, icons};
pub use matrix_background::MatrixBackground;
pub use quote_form::QuoteForm;
