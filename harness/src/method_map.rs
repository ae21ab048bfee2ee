use routebench_types::Method;

/// One slot per [`Method`], for routers that only match paths.
#[derive(Debug, Clone)]
pub struct MethodMap<T> {
    slots: [Option<T>; Method::COUNT],
}

impl<T> Default for MethodMap<T> {
    fn default() -> Self {
        MethodMap {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<T> MethodMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_insert_with(&mut self, method: Method, f: impl FnOnce() -> T) -> &mut T {
        self.slots[method.index()].get_or_insert_with(f)
    }

    pub fn get(&self, method: &http::Method) -> Option<&T> {
        Method::from_http(method).and_then(|m| self.slots[m.index()].as_ref())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MethodMap<U> {
        MethodMap {
            slots: self.slots.map(|slot| slot.map(&mut f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_per_method() {
        let mut map = MethodMap::new();
        map.get_or_insert_with(Method::Get, Vec::new).push("/people");
        map.get_or_insert_with(Method::Get, Vec::new).push("/activities");
        map.get_or_insert_with(Method::Delete, Vec::new).push("/moments/:id");

        assert_eq!(map.get(&http::Method::GET).map(Vec::len), Some(2));
        assert_eq!(map.get(&http::Method::DELETE).map(Vec::len), Some(1));
        assert!(map.get(&http::Method::POST).is_none());
        assert!(map.get(&http::Method::HEAD).is_none());
    }

    #[test]
    fn map_keeps_empty_slots_empty() {
        let mut map = MethodMap::new();
        *map.get_or_insert_with(Method::Put, || 0) = 3;
        *map.get_or_insert_with(Method::Patch, || 0) = 4;

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled.get(&http::Method::PUT), Some(&6));
        assert_eq!(doubled.get(&http::Method::PATCH), Some(&8));
        assert!(doubled.get(&http::Method::GET).is_none());
    }
}
