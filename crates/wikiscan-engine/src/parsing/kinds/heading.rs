/// The `=` runs that open and close a heading line.
pub struct HeadingMarker;

impl HeadingMarker {
    pub const EQ: char = '=';

    /// The exact run that frames a heading of `level`, e.g. `"=="` for level 2.
    pub fn run(level: u8) -> String {
        Self::EQ.to_string().repeat(usize::from(level))
    }
}
