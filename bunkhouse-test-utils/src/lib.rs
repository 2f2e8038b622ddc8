pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;
pub mod token;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD},
        test_setup_with_all_tables, test_setup_with_tables,
        token::{expired_token_for, token_for},
        TestError, TestSetup,
    };
}
