use crate::{error::Result, validation::check_inputs};
use std::fmt::{Display, Formatter};

#[cfg(feature = "borsh")]
use borsh::{BorshDeserialize, BorshSerialize};
#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

/// Shapley allocation, one entry per claimant in input order
pub type ValueVector = Vec<f64>;

/// A validated bankruptcy game: an estate that cannot cover the claims against it
///
/// Construction is the only way to obtain one, so every algorithm may rely on
/// `0 < estate < sum(claims)` with all values positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct BankruptcyGame {
    estate: f64,
    claims: Vec<f64>,
    total_claims: f64,
}

impl BankruptcyGame {
    pub fn new(estate: f64, claims: Vec<f64>) -> Result<Self> {
        check_inputs(estate, &claims)?;
        let total_claims = claims.iter().sum();
        Ok(Self {
            estate,
            claims,
            total_claims,
        })
    }

    pub fn estate(&self) -> f64 {
        self.estate
    }

    pub fn claims(&self) -> &[f64] {
        &self.claims
    }

    pub fn n_players(&self) -> usize {
        self.claims.len()
    }

    pub fn total_claims(&self) -> f64 {
        self.total_claims
    }

    /// Shortfall `w0 = sum(claims) - estate`, always positive
    pub fn deficit(&self) -> f64 {
        self.total_claims - self.estate
    }

    /// Claims truncated at the estate; nobody can contribute more than the estate
    pub fn capped_claims(&self) -> Vec<f64> {
        self.claims.iter().map(|&w| w.min(self.estate)).collect()
    }
}

/// Rounded output of a single `compute` call
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "borsh", derive(BorshSerialize, BorshDeserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub value: ValueVector,
    /// Wall time in seconds, rounded like the values
    pub elapsed_time: f64,
}

impl AlgorithmResult {
    pub fn total(&self) -> f64 {
        self.value.iter().sum()
    }
}

impl Display for AlgorithmResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "value: {:?}, elapsed_time: {}s",
            self.value, self.elapsed_time
        )
    }
}

/// One claimant's share under one algorithm, for tabular output
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub algorithm: String,
    pub player: usize,
    pub claim: f64,
    pub value: f64,
}

impl Allocation {
    /// Pair every claim with its value from a result
    pub fn from_result(algorithm: &str, claims: &[f64], result: &AlgorithmResult) -> Vec<Self> {
        claims
            .iter()
            .zip(&result.value)
            .enumerate()
            .map(|(player, (&claim, &value))| Allocation {
                algorithm: algorithm.to_string(),
                player,
                claim,
                value,
            })
            .collect()
    }
}

/// A named game read from a CSV file with columns `label,estate,claims`
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub label: String,
    pub estate: f64,
    pub claims: Vec<f64>,
}

#[cfg(feature = "serde")]
mod csv_support {
    use super::*;
    use crate::error::BankruptcyError;
    use std::path::Path;

    #[derive(Debug, Deserialize)]
    struct GameRow {
        label: String,
        estate: f64,
        claims: String,
    }

    /// Parse a `;`-separated claim list such as `100;200;300`
    fn parse_claims(label: &str, raw: &str) -> Result<Vec<f64>> {
        raw.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>().map_err(|e| {
                    BankruptcyError::InputFile(format!("game {label}: claim {s:?}: {e}"))
                })
            })
            .collect()
    }

    impl GameRecord {
        /// Read games from a CSV file
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
            let reader = csv::Reader::from_path(path)
                .map_err(|e| BankruptcyError::InputFile(e.to_string()))?;
            Self::from_reader(reader)
        }

        pub fn from_csv_str(data: &str) -> Result<Vec<Self>> {
            Self::from_reader(csv::Reader::from_reader(data.as_bytes()))
        }

        fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Self>> {
            let mut games = Vec::new();
            for row in reader.deserialize() {
                let row: GameRow = row.map_err(|e| BankruptcyError::InputFile(e.to_string()))?;
                let claims = parse_claims(&row.label, &row.claims)?;
                games.push(GameRecord {
                    label: row.label,
                    estate: row.estate,
                    claims,
                });
            }
            Ok(games)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BankruptcyError;

    #[test]
    fn test_game_creation() {
        let game = BankruptcyGame::new(150.0, vec![100.0, 200.0]).unwrap();
        assert_eq!(game.estate(), 150.0);
        assert_eq!(game.claims(), &[100.0, 200.0]);
        assert_eq!(game.n_players(), 2);
        assert_eq!(game.total_claims(), 300.0);
        assert_eq!(game.deficit(), 150.0);
        assert_eq!(game.capped_claims(), vec![100.0, 150.0]);
    }

    #[test]
    fn test_game_rejects_invalid() {
        assert!(matches!(
            BankruptcyGame::new(300.0, vec![100.0, 200.0]),
            Err(BankruptcyError::InvalidInput(_))
        ));
        assert!(matches!(
            BankruptcyGame::new(1.0, vec![]),
            Err(BankruptcyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_allocation_rows() {
        let result = AlgorithmResult {
            value: vec![50.0, 100.0],
            elapsed_time: 0.0,
        };
        assert_eq!(result.total(), 150.0);

        let rows = Allocation::from_result("exact", &[100.0, 200.0], &result);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].algorithm, "exact");
        assert_eq!(rows[1].player, 1);
        assert_eq!(rows[1].claim, 200.0);
        assert_eq!(rows[1].value, 100.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_games_from_csv() {
        let data = "label,estate,claims\nsmall,50,100;200\nthree,7,2; 3; 4\n";
        let games = GameRecord::from_csv_str(data).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].label, "small");
        assert_eq!(games[0].estate, 50.0);
        assert_eq!(games[0].claims, vec![100.0, 200.0]);
        assert_eq!(games[1].claims, vec![2.0, 3.0, 4.0]);

        let bad = "label,estate,claims\nbroken,5,1;x\n";
        assert!(matches!(
            GameRecord::from_csv_str(bad),
            Err(BankruptcyError::InputFile(msg)) if msg.contains("broken")
        ));
    }
}
