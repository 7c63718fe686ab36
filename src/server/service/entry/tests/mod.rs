use pkmnlog_test_utils::prelude::*;
