use crate::{
    abstract_trait::{
        IdentityVerifierTrait, ImageStoreTrait, InitializePayment, PaymentGatewayTrait,
        PaymentInit, PaymentVerification, VerifiedIdentity,
    },
    domain::requests::ImageUpload,
    errors::ServiceError,
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, AtomicU32, Ordering},
    },
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records every checkout it opens and answers verification from a script.
#[derive(Debug, Default)]
pub struct FakePaymentGateway {
    counter: AtomicU32,
    fail_init: AtomicBool,
    initialized: Mutex<Vec<InitializePayment>>,
    verifications: Mutex<HashMap<String, PaymentVerification>>,
}

impl FakePaymentGateway {
    pub fn fail_initialization(&self, fail: bool) {
        self.fail_init.store(fail, Ordering::SeqCst);
    }

    pub fn initialized(&self) -> Vec<InitializePayment> {
        lock(&self.initialized).clone()
    }

    pub fn set_verification(&self, reference: &str, status: &str, amount: i64) {
        lock(&self.verifications).insert(
            reference.to_string(),
            PaymentVerification {
                status: status.to_string(),
                amount,
                reference: reference.to_string(),
            },
        );
    }
}

#[async_trait]
impl PaymentGatewayTrait for FakePaymentGateway {
    async fn initialize(&self, req: &InitializePayment) -> Result<PaymentInit, ServiceError> {
        if self.fail_init.load(Ordering::SeqCst) {
            return Err(ServiceError::Payment("gateway unavailable".into()));
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let reference = format!("ref-{n}");

        lock(&self.initialized).push(req.clone());

        Ok(PaymentInit {
            authorization_url: format!("https://checkout.test/{reference}"),
            reference,
        })
    }

    async fn verify(&self, reference: &str) -> Result<PaymentVerification, ServiceError> {
        lock(&self.verifications)
            .get(reference)
            .cloned()
            .ok_or_else(|| ServiceError::Payment(format!("unknown reference {reference}")))
    }
}

/// Accepts only the tokens registered on it.
#[derive(Debug, Default)]
pub struct FakeIdentityVerifier {
    tokens: Mutex<HashMap<String, VerifiedIdentity>>,
}

impl FakeIdentityVerifier {
    pub fn register(&self, token: &str, uid: &str, email: &str, name: Option<&str>) {
        lock(&self.tokens).insert(
            token.to_string(),
            VerifiedIdentity {
                uid: uid.to_string(),
                email: email.to_string(),
                name: name.map(str::to_string),
            },
        );
    }
}

#[async_trait]
impl IdentityVerifierTrait for FakeIdentityVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, ServiceError> {
        lock(&self.tokens)
            .get(id_token)
            .cloned()
            .ok_or_else(|| ServiceError::Identity("unknown token".into()))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    counter: AtomicU32,
    fail_delete: AtomicBool,
    saved: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl InMemoryImageStore {
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Paths saved and not yet deleted.
    pub fn stored(&self) -> Vec<String> {
        lock(&self.saved).clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        lock(&self.deleted).clone()
    }
}

#[async_trait]
impl ImageStoreTrait for InMemoryImageStore {
    async fn save(&self, image: &ImageUpload) -> Result<String, ServiceError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let path = format!("/uploads/{n}-{}", image.file_name);

        lock(&self.saved).push(path.clone());
        Ok(path)
    }

    async fn delete(&self, public_path: &str) -> Result<(), ServiceError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ServiceError::Storage("disk unavailable".into()));
        }

        lock(&self.saved).retain(|p| p != public_path);
        lock(&self.deleted).push(public_path.to_string());
        Ok(())
    }
}
