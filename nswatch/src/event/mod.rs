mod trx;

pub use trx::{new_channel, Rx, Tx};
