/// Field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// String, the complete line without the line terminator
    String,
    /// Signed 64 bit integer
    Integer,
    /// 64 bit floating point number
    Number,
    /// A line that is read and discarded, written back as an empty line
    Skip,
}
