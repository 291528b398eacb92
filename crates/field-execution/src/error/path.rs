use serde::ser::SerializeSeq;

/// Location of a value, or an error, in the response: field names and list indices from the root.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Default)]
pub struct ErrorPath(Vec<ErrorPathSegment>);

impl std::ops::Deref for ErrorPath {
    type Target = Vec<ErrorPathSegment>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for ErrorPath {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub enum ErrorPathSegment {
    Field(Box<str>),
    Index(usize),
}

impl ErrorPath {
    #[must_use]
    pub fn child(&self, segment: impl InsertIntoErrorPath) -> ErrorPath {
        let mut path = self.clone();
        segment.insert_into(&mut path);
        path
    }
}

pub trait InsertIntoErrorPath {
    fn insert_into(self, path: &mut ErrorPath);
}

impl InsertIntoErrorPath for &str {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Field(self.into()));
    }
}

impl InsertIntoErrorPath for String {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Field(self.into_boxed_str()));
    }
}

impl InsertIntoErrorPath for usize {
    fn insert_into(self, path: &mut ErrorPath) {
        path.0.push(ErrorPathSegment::Index(self));
    }
}

impl<T1: InsertIntoErrorPath, T2: InsertIntoErrorPath> InsertIntoErrorPath for (T1, T2) {
    fn insert_into(self, path: &mut ErrorPath) {
        self.0.insert_into(path);
        self.1.insert_into(path);
    }
}

impl<T: InsertIntoErrorPath> From<T> for ErrorPath {
    fn from(t: T) -> Self {
        let mut path = ErrorPath(Vec::new());
        t.insert_into(&mut path);
        path
    }
}

impl serde::Serialize for ErrorPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for segment in &self.0 {
            match segment {
                ErrorPathSegment::Field(name) => seq.serialize_element(name)?,
                ErrorPathSegment::Index(index) => seq.serialize_element(index)?,
            }
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_fields_and_indices() {
        let path = ErrorPath::from("users").child(2_usize).child("name");
        assert_eq!(path.len(), 3);
        assert_eq!(serde_json::to_value(&path).unwrap(), json!(["users", 2, "name"]));
    }

    #[test]
    fn builds_from_pairs() {
        let path = ErrorPath::from(("users", 0_usize));
        assert_eq!(
            *path,
            vec![ErrorPathSegment::Field("users".into()), ErrorPathSegment::Index(0)]
        );
    }
}
