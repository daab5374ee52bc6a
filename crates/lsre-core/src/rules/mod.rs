pub mod date;
pub mod network;
pub mod numeric;
pub mod string;

pub use date::{iso_date, time};
pub use network::{email, ipv4, ipv6, url};
pub use numeric::{credit_card, phone_number};
pub use string::{alphanumeric, hex_color, slug, strong_password, uuid};
