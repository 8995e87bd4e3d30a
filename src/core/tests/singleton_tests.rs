use crate::core::config::{CatalogueConfig, ConcurrencyMode};
use crate::core::errors::CreationError;
use crate::core::singleton::{get_singleton, Catalogue, Singleton};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

struct Counter {
    serial: usize,
}

#[test]
fn test_sequential_calls_share_one_instance() {
    static SLOT: Singleton<Counter> = Singleton::new();
    static BUILT: AtomicUsize = AtomicUsize::new(0);

    assert!(!SLOT.is_initialized());
    let handles: Vec<Arc<Counter>> = (0..5)
        .map(|_| {
            SLOT.get_or_init(|| Counter {
                serial: BUILT.fetch_add(1, Ordering::SeqCst),
            })
        })
        .collect();

    assert_eq!(BUILT.load(Ordering::SeqCst), 1);
    assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    assert_eq!(handles[4].serial, 0);
    assert!(SLOT.get().is_some());
}

#[test]
fn test_racing_first_calls_construct_once() {
    static SLOT: Singleton<Counter> = Singleton::new();
    static BUILT: AtomicUsize = AtomicUsize::new(0);
    const THREADS: usize = 16;

    let barrier = Barrier::new(THREADS);
    let handles: Vec<Arc<Counter>> = thread::scope(|scope| {
        let mut workers = Vec::with_capacity(THREADS);
        for _ in 0..THREADS {
            workers.push(scope.spawn(|| {
                barrier.wait();
                SLOT.get_or_init(|| {
                    thread::sleep(Duration::from_millis(5));
                    Counter {
                        serial: BUILT.fetch_add(1, Ordering::SeqCst),
                    }
                })
            }));
        }
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap())
            .collect()
    });

    assert_eq!(BUILT.load(Ordering::SeqCst), 1);
    assert_eq!(handles.len(), THREADS);
    assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
}

#[test]
fn test_failed_construction_is_retried() {
    static SLOT: Singleton<Counter> = Singleton::new();
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    let init = || {
        let attempt = ATTEMPTS.fetch_add(1, Ordering::SeqCst);
        if attempt == 0 {
            Err(CreationError::ConstructionFailed("first attempt".to_string()))
        } else {
            Ok(Counter { serial: attempt })
        }
    };

    assert!(SLOT.get_or_try_init(init).is_err());
    assert!(!SLOT.is_initialized());

    let instance = SLOT.get_or_try_init(init).unwrap();
    assert_eq!(instance.serial, 1);

    // Registered now, so the initializer is not consulted again
    let again = SLOT.get_or_try_init(init).unwrap();
    assert!(Arc::ptr_eq(&instance, &again));
    assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_catalogue_is_process_wide() {
    let catalogues: Vec<Arc<Catalogue>> = (0..32)
        .into_par_iter()
        .map(|_| get_singleton().unwrap())
        .collect();

    let first = Catalogue::instance().unwrap();
    assert!(catalogues.iter().all(|c| Arc::ptr_eq(c, &first)));
    assert_eq!(first.discriminators(), vec!["A", "B"]);
}

#[test]
fn test_standalone_catalogue_keeps_its_config() {
    let shared = get_singleton().unwrap();
    assert_eq!(shared.config(), &CatalogueConfig::default());

    let config = CatalogueConfig::new()
        .with_concurrency(ConcurrencyMode::Rayon)
        .with_thread_pool_size(2);
    let standalone = Catalogue::new(config.clone()).unwrap();
    assert_eq!(standalone.config(), &config);
    assert!(standalone.config().is_parallel());
    assert_eq!(
        standalone.create_batch(&["A", "B", "A"]).unwrap().len(),
        3
    );
    assert_eq!(standalone.stats().created, 3);
}
