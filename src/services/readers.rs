//! Reader accounts

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        document::Document,
        user::{Account, AccountType},
    },
};

use super::loans::LoanLedger;

/// A library member and their loan ledger
#[derive(Debug, Clone)]
pub struct Reader {
    id: Uuid,
    name: String,
    ledger: LoanLedger,
}

impl Reader {
    pub fn new(name: impl Into<String>, max_loans: usize) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            ledger: LoanLedger::new(name.clone(), max_loans),
            name,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ledger(&self) -> &LoanLedger {
        &self.ledger
    }

    pub fn borrow(&mut self, document: &mut Document) -> AppResult<String> {
        self.ledger.borrow(document)
    }

    pub fn return_document(&mut self, document: &mut Document) -> AppResult<String> {
        self.ledger.return_document(document)
    }

    pub fn history(&self) -> String {
        self.ledger.history_summary()
    }

    pub fn current_loans(&self) -> String {
        self.ledger.current_loans_summary()
    }
}

impl Account for Reader {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> AccountType {
        AccountType::Reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_limit_then_free_a_slot() {
        let mut reader = Reader::new("Amina", 3);
        let mut docs: Vec<Document> = ["A", "B", "C", "D"]
            .iter()
            .map(|id| Document::book(id, id, "Author", 10, 5))
            .collect();

        for doc in docs.iter_mut().take(3) {
            reader.borrow(doc).unwrap();
        }
        let err = reader.borrow(&mut docs[3]).unwrap_err();
        assert!(matches!(err, AppError::LimitReached { max: 3, .. }));
        assert_eq!(docs[3].available_copies, 5);

        reader.return_document(&mut docs[0]).unwrap();
        assert!(reader.borrow(&mut docs[3]).is_ok());
        assert_eq!(reader.ledger().current_loans(), vec!["B", "C", "D"]);
        assert_eq!(reader.ledger().history(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_role() {
        let reader = Reader::new("Amina", 3);
        assert_eq!(reader.role(), AccountType::Reader);
        assert_eq!(reader.greeting(), "Welcome Amina (Reader)");
    }
}
