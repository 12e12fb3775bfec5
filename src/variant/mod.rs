//! Module for the test frameworks a benchmark file can be generated for.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;


const GTEST_HEADER: &str = "#include \"gtest/gtest.h\"\n\n";
const GTEST_FOOTER: &str = "int main(int argc, char* argv[]) { testing::InitGoogleTest(&argc, argv); return RUN_ALL_TESTS(); }";

const LIGHTEST_HEADER: &str = "#include \"lightest/lightest.h\"\n\
#undef __FILE_NAME__\n\
#define __FILE_NAME__ \"lightest_test.cpp\"\n\n";

/// The testing framework targeted by a generated benchmark file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// GoogleTest: `TEST(Suite, Name)` with `ASSERT_EQ`, plus a `main` that runs all tests.
    Gtest,
    /// Lightest: `TEST(Name)` with `REQ`, entry point supplied by the framework.
    Lightest,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Gtest, Variant::Lightest];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Gtest => "gtest",
            Variant::Lightest => "lightest",
        }
    }

    /// File name the generator writes to, relative to the working directory.
    pub fn output_file_name(self) -> &'static str {
        match self {
            Variant::Gtest => "gtest_test.cpp",
            Variant::Lightest => "lightest_test.cpp",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Variant::Gtest => GTEST_HEADER,
            Variant::Lightest => LIGHTEST_HEADER,
        }
    }

    /// Empty for Lightest. The GoogleTest footer has no trailing newline.
    pub fn footer(self) -> &'static str {
        match self {
            Variant::Gtest => GTEST_FOOTER,
            Variant::Lightest => "",
        }
    }

    /// Formats the test declaration for `index`, newline included.
    /// Test names are 1-based while the asserted values are the raw index.
    pub fn test_line(self, index: usize) -> String {
        let number = index + 1;
        match self {
            Variant::Gtest => {
                format!("TEST(Test, Test{number}) {{ ASSERT_EQ({index}, {index}); }}\n")
            }
            Variant::Lightest => format!("TEST(Test{number}) {{ REQ({index}, ==, {index}); }}\n"),
        }
    }

    /// The line template as a plain function pointer, for use in a generator config.
    pub fn line_template(self) -> fn(usize) -> String {
        match self {
            Variant::Gtest => |index| Variant::Gtest.test_line(index),
            Variant::Lightest => |index| Variant::Lightest.test_line(index),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}
