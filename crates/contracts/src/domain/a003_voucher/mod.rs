pub mod aggregate;

pub use aggregate::{Voucher, VoucherDto, VoucherId};
