pub mod algorithms;
pub mod ascii85;
pub mod bases;
pub mod mpi;
pub mod rfc1924;
pub mod rfc4648;
