// Reference model for the index, keys are small non-negative integers
// and slot `key` of the array holds the entry for that key.

#[derive(Clone)]
struct RefNode {
    key: i64,
    value: i64,
}

struct RefNodes {
    entries: Vec<RefNode>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        let mut entries: Vec<RefNode> = Vec::with_capacity(capacity);
        (0..capacity).for_each(|_| entries.push(RefNode { key: -1, value: 0 }));
        RefNodes { entries }
    }

    fn len(&self) -> usize {
        self.entries.iter().filter(|item| item.key >= 0).count()
    }

    fn get(&self, key: i64) -> Option<i64> {
        let entry = &self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            Some(entry.value)
        }
    }

    fn iter(&self) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .filter(|item| item.key >= 0)
            .map(|item| (item.key, item.value))
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }

    // first entry with key >= `key`, or with key > `key` when `strict`.
    fn bound(&self, key: i64, strict: bool) -> Option<(i64, i64)> {
        let from = if strict { key + 1 } else { key };
        if from < 0 {
            return self.iter().next();
        }
        self.entries
            .iter()
            .skip(from as usize)
            .find(|item| item.key >= 0)
            .map(|item| (item.key, item.value))
    }

    // insert only if missing, like the index does.
    fn insert(&mut self, key: i64, value: i64) -> bool {
        let entry = &mut self.entries[key as usize];
        if entry.key < 0 {
            entry.key = key;
            entry.value = value;
            true
        } else {
            false
        }
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let entry = &mut self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            entry.key = -1;
            Some(entry.value)
        }
    }
}

fn random_key(size: usize) -> i64 {
    (random::<u64>() % (size as u64)) as i64
}
