//! Tests for batch progress reporting behavior

#[cfg(test)]
mod tests {
    use cellface::io::progress::ProgressManager;

    // Tests single runs and batches can be driven through the full lifecycle
    // without display errors
    #[test]
    fn test_single_run_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        manager.record_output("cellface_1.png", 1);
        manager.finish();
    }

    // Tests batch mode accepts repeated records
    #[test]
    fn test_batch_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);

        for seed in 0..3 {
            manager.record_output(&format!("cellface_{seed}.png"), seed);
        }
        manager.finish();
    }

    // Tests the default constructor matches new
    #[test]
    fn test_default_constructor() {
        let manager = ProgressManager::default();
        manager.finish();
    }
}
