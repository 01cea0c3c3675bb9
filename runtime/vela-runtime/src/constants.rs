/// Bucket count of every attribute table. Fixed: the table never resizes.
pub const ATTR_BUCKET_CAPACITY: usize = 67;

/// Tolerance of Number equality.
pub const NUMBER_EQ_EPSILON: f64 = 1e-9;

pub const TYPE_OBJECT: &str = "Object";
pub const TYPE_NUMBER: &str = "Number";
pub const TYPE_STRING: &str = "String";
pub const TYPE_BOOLEAN: &str = "Boolean";
pub const TYPE_VECTOR: &str = "Vector";
pub const TYPE_RANGE: &str = "Range";

pub const PROTO_ITERABLE: &str = "Iterable";

pub const ATTR_VALUE: &str = "value";
pub const ATTR_LEN: &str = "len";
pub const ATTR_SIZE: &str = "size";
pub const ATTR_LIST: &str = "list";
pub const ATTR_MIN: &str = "min";
pub const ATTR_MAX: &str = "max";
pub const ATTR_CURRENT: &str = "current";

pub const METHOD_TO_STRING: &str = "toString";
pub const METHOD_EQUALS: &str = "equals";
pub const METHOD_SIZE: &str = "size";
pub const METHOD_NEXT: &str = "next";
pub const METHOD_CURRENT: &str = "current";
