use indexmap::IndexMap;

/// First-seen-order mapping from identifier name to storage address.
/// Addresses are assigned sequentially from 0; entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: IndexMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            entries: IndexMap::new(),
        }
    }

    /// Register a name, or return its existing address.
    pub fn add_entry(&mut self, name: &str) -> u16 {
        if let Some(&addr) = self.entries.get(name) {
            return addr;
        }
        let addr = self.entries.len() as u16;
        self.entries.insert(name.to_string(), addr);
        addr
    }

    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> {
        self.entries.iter().map(|(name, &addr)| (name.as_str(), addr))
    }
}

#[test]
fn test() {
    let mut table = SymbolTable::new();
    assert_eq!(table.add_entry("x"), 0);
    assert_eq!(table.add_entry("y"), 1);
    assert_eq!(table.add_entry("x"), 0);
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("y"), Some(1));
    assert_eq!(table.lookup("z"), None);
    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["x", "y"]);
}
