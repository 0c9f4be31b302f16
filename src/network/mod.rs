pub mod init;
pub mod network;
pub mod topology;

pub use init::InitRanges;
pub use network::Network;
pub use topology::Topology;
