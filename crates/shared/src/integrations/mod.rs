mod firebase;
mod paystack;
mod storage;

pub use self::firebase::{DisabledIdentityVerifier, FirebaseVerifier};
pub use self::paystack::PaystackClient;
pub use self::storage::LocalImageStore;
