//! Useful algorithms related to RSA.

pub(crate) mod emsa;
pub(crate) mod generate;
pub(crate) mod pad;
pub(crate) mod rsa;
