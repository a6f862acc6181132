//! Pre-built Test Fixtures
//!
//! A small dataset whose query results are worked out by hand below, so
//! tests can assert exact values without the full reference data.
//!
//! ```text
//! Agents            state           languages
//!   1               Texas           Spanish / English
//!   2               Texas           English / Spanish
//!   3               Texas           Vietnamese
//!   4               New Hampshire   Arabic / French
//!   5               Wisconsin       English / English
//!   6               New Hampshire   English / Arabic
//!
//! Disasters  state       end         declared    radius
//!   1        Texas       2023-04-05  2023-04-10  10
//!   2        California  2022-11-20  2022-11-02   5
//!   3        California  2023-02-15  2023-02-15   1
//!   4        Alaska      2023-04-01  2023-04-20  20
//!   5        Texas       2021-07-01  2021-06-01  50   (no claims)
//!
//! Claims  disaster  agent  handler  cost      severity  status
//!   1     1         1      1        1000.005  5         Open
//!   2     1         1      1        2000.00   8         Closed
//!   3     2         2      1         500.10   3         Open
//!   4     3         2      2         250.25   9         Received
//!   5     4         99     2        4000.00   2         Closed
//!   6     99        3      2         100.00   10        Open
//!   7     2         1      9           0.00   1         Open
//! ```

use domain_claims::{Agent, Claim, ClaimHandler, Dataset, Disaster};
use rust_decimal_macros::dec;

use crate::builders::{claim_handler, AgentBuilder, ClaimBuilder, DisasterBuilder};

/// The hand-computed sample dataset
pub struct SampleData;

impl SampleData {
    pub fn agents() -> Vec<Agent> {
        vec![
            AgentBuilder::new(1).state("Texas").primary_language("Spanish").secondary_language("English").build(),
            AgentBuilder::new(2).state("Texas").primary_language("English").secondary_language("Spanish").build(),
            AgentBuilder::new(3).state("Texas").primary_language("Vietnamese").build(),
            AgentBuilder::new(4).state("New Hampshire").primary_language("Arabic").secondary_language("French").build(),
            AgentBuilder::new(5).state("Wisconsin").primary_language("English").secondary_language("English").build(),
            AgentBuilder::new(6).state("New Hampshire").primary_language("English").secondary_language("Arabic").build(),
        ]
    }

    pub fn claim_handlers() -> Vec<ClaimHandler> {
        (1..=3).map(claim_handler).collect()
    }

    pub fn disasters() -> Vec<Disaster> {
        vec![
            DisasterBuilder::new(1)
                .state("Texas")
                .period("2023-04-01", "2023-04-05")
                .declared("2023-04-10")
                .radius(dec!(10))
                .build(),
            DisasterBuilder::new(2)
                .state("California")
                .period("2022-10-30", "2022-11-20")
                .declared("2022-11-02")
                .radius(dec!(5))
                .build(),
            DisasterBuilder::new(3)
                .state("California")
                .period("2023-02-10", "2023-02-15")
                .declared("2023-02-15")
                .radius(dec!(1))
                .build(),
            DisasterBuilder::new(4)
                .state("Alaska")
                .period("2023-03-20", "2023-04-01")
                .declared("2023-04-20")
                .radius(dec!(20))
                .build(),
            DisasterBuilder::new(5)
                .state("Texas")
                .period("2021-05-20", "2021-07-01")
                .declared("2021-06-01")
                .radius(dec!(50))
                .build(),
        ]
    }

    pub fn claims() -> Vec<Claim> {
        vec![
            ClaimBuilder::new(1).disaster(1).agent(1).handler(1).cost(dec!(1000.005)).severity(5).build(),
            ClaimBuilder::new(2).disaster(1).agent(1).handler(1).cost(dec!(2000.00)).severity(8).closed().build(),
            ClaimBuilder::new(3).disaster(2).agent(2).handler(1).cost(dec!(500.10)).severity(3).build(),
            ClaimBuilder::new(4).disaster(3).agent(2).handler(2).cost(dec!(250.25)).severity(9).status("Received").build(),
            ClaimBuilder::new(5).disaster(4).agent(99).handler(2).cost(dec!(4000.00)).severity(2).closed().build(),
            ClaimBuilder::new(6).disaster(99).agent(3).handler(2).cost(dec!(100.00)).severity(10).build(),
            ClaimBuilder::new(7).disaster(2).agent(1).handler(9).cost(dec!(0.00)).severity(1).build(),
        ]
    }

    /// All four collections as a dataset
    pub fn dataset() -> Dataset {
        Dataset::new(
            Self::agents(),
            Self::claim_handlers(),
            Self::claims(),
            Self::disasters(),
        )
    }
}
