use std::collections::HashMap;

pub type ItemId = usize;
pub type Itemset = Vec<ItemId>;
pub type Transaction = Vec<ItemId>;

pub type SupportCount = u32;
pub type ItemCounts = HashMap<ItemId, SupportCount>;
pub type ItemsetCounts = HashMap<Itemset, SupportCount>;
