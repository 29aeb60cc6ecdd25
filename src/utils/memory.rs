use std::sync::{Mutex, MutexGuard};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryCollection keeps documents in insertion order, which is the order every
// scan sees them in.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    documents: Mutex<Vec<T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            documents: Mutex::new(vec![]),
        }
    }
}

impl<T: Identifiable + Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, document: T) -> LibraryResult<String> {
        let id = document.id();
        self.lock()?.push(document);
        Ok(id)
    }

    pub fn find<P: Fn(&T) -> bool>(&self, predicate: P) -> LibraryResult<Vec<T>> {
        Ok(self.lock()?.iter().filter(|d| predicate(d)).cloned().collect())
    }

    pub fn find_first<P: Fn(&T) -> bool>(&self, predicate: P) -> LibraryResult<Option<T>> {
        Ok(self.lock()?.iter().find(|d| predicate(d)).cloned())
    }

    // runs the mutation on the first match and returns what it reported
    pub fn update_first<P: Fn(&T) -> bool, F: FnOnce(&mut T) -> bool>(&self, predicate: P, mutation: F) -> LibraryResult<bool> {
        let mut documents = self.lock()?;
        match documents.iter_mut().find(|d| predicate(d)) {
            Some(document) => Ok(mutation(document)),
            None => Ok(false),
        }
    }

    pub fn remove_first<P: Fn(&T) -> bool>(&self, predicate: P) -> LibraryResult<bool> {
        let mut documents = self.lock()?;
        match documents.iter().position(|d| predicate(d)) {
            Some(ndx) => {
                documents.remove(ndx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<'_, Vec<T>>> {
        self.documents.lock().map_err(|err| LibraryError::runtime(
            format!("memory collection poisoned {}", err).as_str(), None))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::utils::memory::MemoryCollection;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        id: String,
        value: i64,
    }

    impl Identifiable for Doc {
        fn id(&self) -> String {
            self.id.to_string()
        }
    }

    fn doc(id: &str, value: i64) -> Doc {
        Doc { id: id.to_string(), value }
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order() {
        let collection = MemoryCollection::new();
        for (id, value) in [("c", 3), ("a", 1), ("b", 2)] {
            assert_eq!(id, collection.insert(doc(id, value)).expect("should insert").as_str());
        }
        let ids: Vec<String> = collection.find(|_| true).expect("should find").into_iter().map(|d| d.id).collect();
        assert_eq!(vec!["c", "a", "b"], ids);
    }

    #[tokio::test]
    async fn test_should_update_and_remove_first_match() {
        let collection = MemoryCollection::new();
        collection.insert(doc("a", 1)).expect("should insert");
        collection.insert(doc("b", 1)).expect("should insert");
        let updated = collection.update_first(|d| d.value == 1, |d| { d.value = 5; true }).expect("should update");
        assert!(updated);
        assert_eq!(Some(doc("a", 5)), collection.find_first(|d| d.id == "a").expect("should find"));
        assert_eq!(Some(doc("b", 1)), collection.find_first(|d| d.id == "b").expect("should find"));

        assert!(collection.remove_first(|d| d.value == 1).expect("should remove"));
        assert!(!collection.remove_first(|d| d.value == 1).expect("should not remove"));
        assert!(!collection.update_first(|d| d.id == "b", |_| true).expect("should not update"));
        assert_eq!(vec![doc("b", 1)], collection.find(|_| true).expect("should find"));
    }
}
