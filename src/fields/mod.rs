mod extensions;

pub(crate) mod fp;

pub(crate) mod fp12;
pub(crate) mod fp2;
pub(crate) mod fp6;
