use core_types::Order;

/// The in-memory, read-only handle to the loaded order records.
///
/// This is the capability every report function takes: it can be iterated and
/// counted, and nothing else. All mutation happens before construction, in
/// the fixture loader.
#[derive(Debug, Clone, Default)]
pub struct OrderCollection {
    orders: Vec<Order>,
}

impl OrderCollection {
    /// Wraps already-deserialized records. Used by the fixture loader and by
    /// tests that build collections in code.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The total number of records in the collection.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates over every record, in fixture order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Borrows the full record set.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl<'a> IntoIterator for &'a OrderCollection {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
