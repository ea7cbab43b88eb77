use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    error::RenbanError,
    renban::displayer::{Displayer, DisplayerRegistry},
};

// 名前 -> 現在の番号．一度も数えていない名前は 0 ではなく「無い」
#[derive(Default)]
struct Counts {
    counts: BTreeMap<String, usize>,
}

impl Counts {
    fn count(&mut self, name: &str) {
        *self.counts.entry(name.to_owned()).or_insert(0) += 1;
    }

    fn get(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    fn clear(&mut self, name: &str) {
        self.counts.remove(name);
    }

    fn clear_all(&mut self) {
        self.counts.clear();
    }
}

pub struct MarkCounter {
    counts: Rc<RefCell<Counts>>,

    // 大見出しの連番が更新されたら中見出し以降はリセットされる．
    // 中見出しの連番が更新されたら小見出しはリセットされる．
    // リセットするためだけに参照するので所有はしない
    subsections: Vec<Weak<RefCell<Counts>>>,

    displayers: DisplayerRegistry,
}

impl MarkCounter {
    pub fn new() -> Self {
        MarkCounter {
            counts: Rc::new(RefCell::new(Counts::default())),
            subsections: Vec::new(),
            displayers: DisplayerRegistry::new(),
        }
    }

    pub fn set_subsection(&mut self, counter: &MarkCounter) -> &mut Self {
        self.subsections.push(Rc::downgrade(&counter.counts));
        self
    }

    pub fn set_displayer(&mut self, displayer: Displayer) -> &mut Self {
        self.displayers.register(displayer);
        self
    }

    pub fn count(&mut self, name: &str) {
        self.counts.borrow_mut().count(name);

        // 名前に関係なく子の番号は全て消す
        for subsection in &self.subsections {
            if let Some(counts) = subsection.upgrade() {
                counts.borrow_mut().clear_all();
            }
        }
    }

    pub fn clear(&mut self, name: &str) {
        self.counts.borrow_mut().clear(name);
    }

    pub fn clear_all(&mut self) {
        self.counts.borrow_mut().clear_all();
    }

    pub fn current(&self, name: &str) -> Option<usize> {
        self.counts.borrow().get(name)
    }

    pub fn get_displaytext(&self, name: &str) -> Result<String, RenbanError> {
        let current_count = self.current(name).ok_or_else(|| RenbanError::NoEntry {
            name: name.to_owned(),
        })?;
        self.displayers.display(name, current_count)
    }
}

impl Default for MarkCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MarkCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.counts.borrow();
        let entries: Vec<String> = counts
            .counts
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
