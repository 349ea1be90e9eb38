use mdcheck_core::common::EnvironmentError;
use mdcheck_core::locator::ProcessImage;
use mockall::mock;
use std::path::PathBuf;

mock! {
    pub Image {}
    impl ProcessImage for Image {
        fn image_path(&self) -> Result<PathBuf, EnvironmentError>;
    }
}

/// A mock image that reports `path` exactly once.
pub fn image_at(path: &str) -> MockImage {
    let mut image = MockImage::new();
    let path = PathBuf::from(path);
    let _ = image
        .expect_image_path()
        .times(1)
        .returning(move || Ok(path.clone()));
    image
}
