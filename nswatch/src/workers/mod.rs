mod printer;
mod receiver;

pub use printer::PrinterWorker;
pub use receiver::ReceiverWorker;
