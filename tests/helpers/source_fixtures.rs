//! Common declaration file fixtures for tests.

// 5.0 files
pub const V5_PERSON: &str = "\
Grammar: DataElement 5.0
Namespace: shr.demo

Element: Person
Concept: TBD
0..1 BirthDate
1..* shr.core.Name
";

pub const V5_PATIENT: &str = "\
Grammar: DataElement 5.0
Namespace: shr.demo

EntryElement: Patient
Based on: Person
Description: \"A person receiving care.\"
0..1 Deceased
1..1 BirthDate
";

// 6.0 files
pub const V6_PERSON: &str = "\
Grammar: DataElement 6.0
Namespace: shr.demo

Element: Person
Property: BirthDate 0..1
Property: shr.core.Name 1..*
";

pub const V6_PATIENT: &str = "\
Grammar: DataElement 6.0
Namespace: shr.demo

Entry: Patient
Parent: Person
Description: \"A person receiving care.\"
Property: Deceased 0..1
Property: BirthDate 1..1
";

// Same name in both grammars
pub const V5_FOO: &str = "\
Grammar: DataElement 5.0

Element: Foo
0..1 FromFive
";

pub const V6_FOO: &str = "\
Grammar: DataElement 6.0

Element: Foo
Property: FromSix 1..1
";

// Parent cycle
pub const V6_CYCLE: &str = "\
Grammar: DataElement 6.0

Element: A
Parent: B
Property: Alpha 0..1

Element: B
Parent: A
Property: Beta 0..1
";

// Non data element files
pub const VALUE_SET_FILE: &str = "\
Grammar: ValueSet 6.0
Namespace: shr.demo

ValueSet: Colors
";

pub const MAP_FILE: &str = "\
Grammar: Map 6.0
Namespace: shr.demo
";

pub const CONFIG_JSON: &str = r#"{ "projectName": "demo", "fhirURL": "http://example.org" }"#;
