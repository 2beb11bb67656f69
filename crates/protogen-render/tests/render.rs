use protogen_render::render;
use protogen_schema::prelude::*;

#[test]
fn empty_document_renders_exactly_the_header() {
    let spec = ProtoSpec::builder().build();
    assert_eq!(render(&spec).unwrap(), "syntax = \"proto3\";\n\n");
}

#[test]
fn package_and_single_message() {
    let ping = Message::builder("Ping")
        .unwrap()
        .field(ScalarType::String, "msg")
        .unwrap()
        .build();
    let spec = ProtoSpec::builder()
        .package("demo.pkg")
        .unwrap()
        .message(ping)
        .unwrap()
        .build();

    let expected = "\
syntax = \"proto3\";

package demo.pkg;

message Ping {
  string msg = 1;
}
";
    assert_eq!(render(&spec).unwrap(), expected);
}

#[test]
fn full_document_layout() {
    let phone_type = Enum::builder("PhoneType")
        .unwrap()
        .comment("PhoneType comment")
        .value_with(EnumValue::new("MOBILE", 0).unwrap().with_comment("mobile comment"))
        .unwrap()
        .value("HOME")
        .unwrap()
        .value_with(EnumValue::new("WORK", 2).unwrap().with_comment("work comment"))
        .unwrap()
        .build();

    let phone_number = Message::builder("PhoneNumber")
        .unwrap()
        .field(ScalarType::String, "number")
        .unwrap()
        .field(&phone_type, "type")
        .unwrap()
        .build();

    let person = Message::builder("Person")
        .unwrap()
        .comment("Person comment")
        .field_with(
            MessageField::new(ScalarType::String, "name", 1)
                .unwrap()
                .with_comment("name comment"),
        )
        .unwrap()
        .field_with(
            MessageField::new(ScalarType::Int32, "id", 2)
                .unwrap()
                .with_comment("id comment"),
        )
        .unwrap()
        .field_with(
            MessageField::new(ScalarType::String, "email", 3)
                .unwrap()
                .with_comment("email comment"),
        )
        .unwrap()
        .field_with(
            MessageField::new(&phone_number, "phones", 4)
                .unwrap()
                .repeated()
                .with_comment("phones comment"),
        )
        .unwrap()
        .build();

    let address_book = Message::builder("AddressBook")
        .unwrap()
        .comment("AddressBook comment")
        .field_with(
            MessageField::new(&person, "people", 1)
                .unwrap()
                .repeated()
                .with_comment("people comment"),
        )
        .unwrap()
        .build();

    let request = Message::builder("SearchPersonRequest")
        .unwrap()
        .field(ScalarType::String, "name")
        .unwrap()
        .build();
    let response = Message::builder("SearchPersonResponse")
        .unwrap()
        .field_with(MessageField::new(&person, "persons", 1).unwrap().repeated())
        .unwrap()
        .build();

    let search = Service::builder("SearchPersonService")
        .unwrap()
        .comment("SearchPersonService comment")
        .rpc(
            Rpc::new("Search", &request, &response)
                .unwrap()
                .with_comment("search comment"),
        )
        .unwrap()
        .build();

    let spec = ProtoSpec::builder()
        .package("integ.sample")
        .unwrap()
        .message(person)
        .unwrap()
        .message(phone_number)
        .unwrap()
        .message(address_book)
        .unwrap()
        .enumeration(phone_type)
        .unwrap()
        .message(request)
        .unwrap()
        .message(response)
        .unwrap()
        .service(search)
        .unwrap()
        .build();

    let expected = "\
syntax = \"proto3\";

package integ.sample;

message Person { // Person comment
  string name = 1; // name comment
  int32 id = 2; // id comment
  string email = 3; // email comment
  repeated PhoneNumber phones = 4; // phones comment
}

message PhoneNumber {
  string number = 1;
  PhoneType type = 2;
}

message AddressBook { // AddressBook comment
  repeated Person people = 1; // people comment
}

message SearchPersonRequest {
  string name = 1;
}

message SearchPersonResponse {
  repeated Person persons = 1;
}

enum PhoneType { // PhoneType comment
  MOBILE = 0; // mobile comment
  HOME = 1;
  WORK = 2; // work comment
}

service SearchPersonService { // SearchPersonService comment
  rpc Search (SearchPersonRequest) returns (SearchPersonResponse); // search comment
}
";
    assert_eq!(render(&spec).unwrap(), expected);
}

#[test]
fn imports_and_document_comment() {
    let spec = ProtoSpec::builder()
        .package("x.y")
        .unwrap()
        .import(Import::new("sample1.proto"))
        .import(Import::public("shared.proto"))
        .comment("generated by hand")
        .message(Message::builder("JustSomeTestMessage").unwrap().build())
        .unwrap()
        .build();

    let expected = "\
syntax = \"proto3\";

package x.y;

import \"sample1.proto\";
import public \"shared.proto\";

// generated by hand

message JustSomeTestMessage {
}
";
    assert_eq!(render(&spec).unwrap(), expected);
}

#[test]
fn stream_keywords_follow_the_flags() {
    let input = Message::builder("InputMessage").unwrap().build();
    let output = Message::builder("OutputMessage").unwrap().build();
    let service = Service::builder("TestService")
        .unwrap()
        .rpc(
            Rpc::new("TestCall", &input, &output)
                .unwrap()
                .stream_input()
                .stream_output(),
        )
        .unwrap()
        .build();

    let spec = ProtoSpec::builder()
        .message(input)
        .unwrap()
        .message(output)
        .unwrap()
        .service(service)
        .unwrap()
        .build();

    let text = render(&spec).unwrap();
    assert!(text.contains("  rpc TestCall (stream InputMessage) returns (stream OutputMessage);\n"));
}

#[test]
fn nested_messages_render_as_indented_blocks() {
    let inner = Message::builder("Inner")
        .unwrap()
        .field(ScalarType::Bool, "flag")
        .unwrap()
        .build();
    let middle = Message::builder("Middle")
        .unwrap()
        .field(&inner, "sibling")
        .unwrap()
        .nested(inner)
        .unwrap()
        .build();
    let outer = Message::builder("Outer")
        .unwrap()
        .field(ScalarType::String, "name")
        .unwrap()
        .nested(middle)
        .unwrap()
        .build();

    let spec = ProtoSpec::builder().message(outer).unwrap().build();

    let expected = "\
syntax = \"proto3\";

message Outer {
  string name = 1;

  message Middle {
    Inner sibling = 1;

    message Inner {
      bool flag = 1;
    }
  }
}
";
    assert_eq!(render(&spec).unwrap(), expected);
}

#[test]
fn fieldless_wrapper_needs_no_separator_before_nested() {
    let wrapper = Message::builder("Wrapper")
        .unwrap()
        .nested(Message::builder("Inner").unwrap().build())
        .unwrap()
        .build();
    let spec = ProtoSpec::builder().message(wrapper).unwrap().build();

    let expected = "\
syntax = \"proto3\";

message Wrapper {
  message Inner {
  }
}
";
    assert_eq!(render(&spec).unwrap(), expected);
}

#[test]
fn injected_any_import_appears_in_the_import_section() {
    let holder = Message::builder("Holder")
        .unwrap()
        .field(FieldType::Any, "payload")
        .unwrap()
        .build();
    let spec = ProtoSpec::builder().message(holder).unwrap().build();

    let expected = "\
syntax = \"proto3\";

import \"google/protobuf/any.proto\";

message Holder {
  google.protobuf.Any payload = 1;
}
";
    assert_eq!(render(&spec).unwrap(), expected);
}

#[test]
fn rendering_is_deterministic() {
    let stage = Enum::builder("Stage").unwrap().value("INIT").unwrap().build();
    let ping = Message::builder("Ping")
        .unwrap()
        .field(ScalarType::String, "msg")
        .unwrap()
        .field(&stage, "stage")
        .unwrap()
        .build();
    let spec = ProtoSpec::builder()
        .package("demo")
        .unwrap()
        .message(ping)
        .unwrap()
        .enumeration(stage)
        .unwrap()
        .build();

    assert_eq!(render(&spec).unwrap(), render(&spec).unwrap());
}
