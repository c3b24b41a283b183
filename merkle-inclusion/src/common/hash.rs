use sha2::{
    Digest as DigestImpl,
    Sha256,
};

use super::Digest;

pub fn sum<T: AsRef<[u8]>>(data: T) -> Digest {
    let mut hash = Sha256::new();
    hash.update(data.as_ref());
    Digest::new(hash.finalize().into())
}

pub fn sum_iter<I: IntoIterator<Item = T>, T: AsRef<[u8]>>(iterator: I) -> Digest {
    let mut hash = Sha256::new();
    for data in iterator {
        hash.update(data.as_ref());
    }
    Digest::new(hash.finalize().into())
}
