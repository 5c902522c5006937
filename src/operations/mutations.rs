//! Operations that change remote state.
//!
//! Each mutation takes its arguments as separate variables and assembles the
//! `input` object inside the document, so omitted optional variables are
//! simply absent from the input.

use super::ParamShape::{
    Boolean, DateTime, Float, Id, IdList, Int, Json, Object, ObjectList, String, StringList,
};
use super::{OperationKind, OperationSpec, ParamShape, ParamSpec};

const fn req(name: &'static str, shape: ParamShape) -> ParamSpec {
    ParamSpec::required(name, shape)
}

const fn opt(name: &'static str, shape: ParamShape) -> ParamSpec {
    ParamSpec::optional(name, shape)
}

const ID_ONLY: &[ParamSpec] = &[req("id", Id)];

// Organizations

pub const CREATE_ORGANIZATION: OperationSpec = OperationSpec {
    name: "createOrganization",
    kind: OperationKind::Mutation,
    root_field: "createOrganization",
    document: r"mutation createOrganization($industry: String!, $name: String!) {
  createOrganization(input: { industry: $industry, name: $name }) {
    organization { id name created_at }
  }
}",
    params: &[req("industry", String), req("name", String)],
};

pub const UPDATE_ORGANIZATION: OperationSpec = OperationSpec {
    name: "updateOrganization",
    kind: OperationKind::Mutation,
    root_field: "updateOrganization",
    document: r"mutation updateOrganization($id: ID!, $name: String!, $only_admin_can_invite_users: Boolean, $only_admin_can_create_pipes: Boolean, $force_omniauth_to_normal_users: Boolean) {
  updateOrganization(input: {
    id: $id
    name: $name
    only_admin_can_invite_users: $only_admin_can_invite_users
    only_admin_can_create_pipes: $only_admin_can_create_pipes
    force_omniauth_to_normal_users: $force_omniauth_to_normal_users
  }) {
    organization {
      id
      name
      only_admin_can_invite_users
      only_admin_can_create_pipes
      force_omniauth_to_normal_users
    }
  }
}",
    params: &[
        req("id", Id),
        req("name", String),
        opt("only_admin_can_invite_users", Boolean),
        opt("only_admin_can_create_pipes", Boolean),
        opt("force_omniauth_to_normal_users", Boolean),
    ],
};

pub const DELETE_ORGANIZATION: OperationSpec = OperationSpec {
    name: "deleteOrganization",
    kind: OperationKind::Mutation,
    root_field: "deleteOrganization",
    document: r"mutation deleteOrganization($id: ID!) {
  deleteOrganization(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Pipes

pub const CLONE_PIPES: OperationSpec = OperationSpec {
    name: "clonePipes",
    kind: OperationKind::Mutation,
    root_field: "clonePipes",
    document: r"mutation clonePipes($organization_id: ID!, $pipe_template_ids: [ID]!) {
  clonePipes(input: { organization_id: $organization_id, pipe_template_ids: $pipe_template_ids }) {
    pipes { id name }
  }
}",
    params: &[req("organization_id", Id), req("pipe_template_ids", IdList)],
};

pub const CREATE_PIPE: OperationSpec = OperationSpec {
    name: "createPipe",
    kind: OperationKind::Mutation,
    root_field: "createPipe",
    document: r"mutation createPipe($organization_id: ID!, $name: String!, $labels: [LabelInput], $members: [MemberInput], $phases: [PhaseInput], $start_form_fields: [PhaseFieldInput], $preferences: RepoPreferenceInput) {
  createPipe(input: {
    organization_id: $organization_id
    name: $name
    labels: $labels
    members: $members
    phases: $phases
    start_form_fields: $start_form_fields
    preferences: $preferences
  }) {
    pipe {
      id
      name
      labels { id name color }
      members { user { id name } role_name }
      phases { id name done }
      start_form_fields { id label type }
    }
  }
}",
    params: &[
        req("organization_id", Id),
        req("name", String),
        opt("labels", ObjectList),
        opt("members", ObjectList),
        opt("phases", ObjectList),
        opt("start_form_fields", ObjectList),
        opt("preferences", Object),
    ],
};

pub const UPDATE_PIPE: OperationSpec = OperationSpec {
    name: "updatePipe",
    kind: OperationKind::Mutation,
    root_field: "updatePipe",
    document: r"mutation updatePipe($id: ID!, $name: String, $icon: String, $title_field_id: ID, $public: Boolean, $public_form: Boolean, $only_assignees_can_edit_cards: Boolean, $only_admin_can_remove_cards: Boolean, $anyone_can_create_card: Boolean, $expiration_time_by_unit: Int, $expiration_unit: Int) {
  updatePipe(input: {
    id: $id
    name: $name
    icon: $icon
    title_field_id: $title_field_id
    public: $public
    public_form: $public_form
    only_assignees_can_edit_cards: $only_assignees_can_edit_cards
    only_admin_can_remove_cards: $only_admin_can_remove_cards
    anyone_can_create_card: $anyone_can_create_card
    expiration_time_by_unit: $expiration_time_by_unit
    expiration_unit: $expiration_unit
  }) {
    pipe {
      id
      name
      icon
      public
      public_form
      only_assignees_can_edit_cards
      only_admin_can_remove_cards
      anyone_can_create_card
      title_field { id synced_with_card }
    }
  }
}",
    params: &[
        req("id", Id),
        opt("name", String),
        opt("icon", String),
        opt("title_field_id", Id),
        opt("public", Boolean),
        opt("public_form", Boolean),
        opt("only_assignees_can_edit_cards", Boolean),
        opt("only_admin_can_remove_cards", Boolean),
        opt("anyone_can_create_card", Boolean),
        opt("expiration_time_by_unit", Int),
        opt("expiration_unit", Int),
    ],
};

pub const DELETE_PIPE: OperationSpec = OperationSpec {
    name: "deletePipe",
    kind: OperationKind::Mutation,
    root_field: "deletePipe",
    document: r"mutation deletePipe($id: ID!) {
  deletePipe(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Phases

pub const CREATE_PHASE: OperationSpec = OperationSpec {
    name: "createPhase",
    kind: OperationKind::Mutation,
    root_field: "createPhase",
    document: r"mutation createPhase($pipe_id: ID!, $name: String!, $description: String, $done: Boolean, $only_admin_can_move_to_previous: Boolean, $can_receive_card_directly_from_draft: Boolean) {
  createPhase(input: {
    pipe_id: $pipe_id
    name: $name
    description: $description
    done: $done
    only_admin_can_move_to_previous: $only_admin_can_move_to_previous
    can_receive_card_directly_from_draft: $can_receive_card_directly_from_draft
  }) {
    phase { id name description done }
  }
}",
    params: &[
        req("pipe_id", Id),
        req("name", String),
        opt("description", String),
        opt("done", Boolean),
        opt("only_admin_can_move_to_previous", Boolean),
        opt("can_receive_card_directly_from_draft", Boolean),
    ],
};

pub const UPDATE_PHASE: OperationSpec = OperationSpec {
    name: "updatePhase",
    kind: OperationKind::Mutation,
    root_field: "updatePhase",
    document: r"mutation updatePhase($id: ID!, $name: String!, $description: String, $done: Boolean, $only_admin_can_move_to_previous: Boolean, $can_receive_card_directly_from_draft: Boolean) {
  updatePhase(input: {
    id: $id
    name: $name
    description: $description
    done: $done
    only_admin_can_move_to_previous: $only_admin_can_move_to_previous
    can_receive_card_directly_from_draft: $can_receive_card_directly_from_draft
  }) {
    phase { id name description done }
  }
}",
    params: &[
        req("id", Id),
        req("name", String),
        opt("description", String),
        opt("done", Boolean),
        opt("only_admin_can_move_to_previous", Boolean),
        opt("can_receive_card_directly_from_draft", Boolean),
    ],
};

pub const DELETE_PHASE: OperationSpec = OperationSpec {
    name: "deletePhase",
    kind: OperationKind::Mutation,
    root_field: "deletePhase",
    document: r"mutation deletePhase($id: ID!) {
  deletePhase(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Phase fields

pub const CREATE_PHASE_FIELD: OperationSpec = OperationSpec {
    name: "createPhaseField",
    kind: OperationKind::Mutation,
    root_field: "createPhaseField",
    document: r"mutation createPhaseField($phase_id: ID!, $type: ID!, $label: String!, $description: String, $required: Boolean, $help: String, $editable: Boolean, $can_create_database_record: Boolean, $can_have_multiple_database_records: Boolean, $sync_with_card: Boolean, $options: [String]) {
  createPhaseField(input: {
    phase_id: $phase_id
    type: $type
    label: $label
    description: $description
    required: $required
    help: $help
    editable: $editable
    can_create_database_record: $can_create_database_record
    can_have_multiple_database_records: $can_have_multiple_database_records
    sync_with_card: $sync_with_card
    options: $options
  }) {
    phase_field { id label type description help required editable options phase { id name } }
  }
}",
    params: &[
        req("phase_id", Id),
        req("type", String),
        req("label", String),
        opt("description", String),
        opt("required", Boolean),
        opt("help", String),
        opt("editable", Boolean),
        opt("can_create_database_record", Boolean),
        opt("can_have_multiple_database_records", Boolean),
        opt("sync_with_card", Boolean),
        opt("options", StringList),
    ],
};

pub const UPDATE_PHASE_FIELD: OperationSpec = OperationSpec {
    name: "updatePhaseField",
    kind: OperationKind::Mutation,
    root_field: "updatePhaseField",
    document: r"mutation updatePhaseField($id: ID!, $label: String!, $index: Float, $required: Boolean, $editable: Boolean, $help: String, $description: String, $sync_with_card: Boolean, $options: [String]) {
  updatePhaseField(input: {
    id: $id
    label: $label
    index: $index
    required: $required
    editable: $editable
    help: $help
    description: $description
    sync_with_card: $sync_with_card
    options: $options
  }) {
    phase_field { id label type description help required editable options }
  }
}",
    params: &[
        req("id", Id),
        req("label", String),
        opt("index", Float),
        opt("required", Boolean),
        opt("editable", Boolean),
        opt("help", String),
        opt("description", String),
        opt("sync_with_card", Boolean),
        opt("options", StringList),
    ],
};

pub const DELETE_PHASE_FIELD: OperationSpec = OperationSpec {
    name: "deletePhaseField",
    kind: OperationKind::Mutation,
    root_field: "deletePhaseField",
    document: r"mutation deletePhaseField($id: ID!) {
  deletePhaseField(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Labels

pub const CREATE_LABEL: OperationSpec = OperationSpec {
    name: "createLabel",
    kind: OperationKind::Mutation,
    root_field: "createLabel",
    document: r"mutation createLabel($pipe_id: ID!, $name: String!, $color: String!) {
  createLabel(input: { pipe_id: $pipe_id, name: $name, color: $color }) {
    label { id name color }
  }
}",
    params: &[req("pipe_id", Id), req("name", String), req("color", String)],
};

pub const UPDATE_LABEL: OperationSpec = OperationSpec {
    name: "updateLabel",
    kind: OperationKind::Mutation,
    root_field: "updateLabel",
    document: r"mutation updateLabel($id: ID!, $name: String!, $color: String!) {
  updateLabel(input: { id: $id, name: $name, color: $color }) {
    label { id name color }
  }
}",
    params: &[req("id", Id), req("name", String), req("color", String)],
};

pub const DELETE_LABEL: OperationSpec = OperationSpec {
    name: "deleteLabel",
    kind: OperationKind::Mutation,
    root_field: "deleteLabel",
    document: r"mutation deleteLabel($id: ID!) {
  deleteLabel(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Cards

pub const CREATE_CARD: OperationSpec = OperationSpec {
    name: "createCard",
    kind: OperationKind::Mutation,
    root_field: "createCard",
    document: r"mutation createCard($pipe_id: ID!, $title: String!, $phase_id: ID, $due_date: DateTime, $assignee_ids: [ID], $label_ids: [ID], $fields_attributes: [FieldValueInput], $parent_ids: [ID]) {
  createCard(input: {
    pipe_id: $pipe_id
    title: $title
    phase_id: $phase_id
    due_date: $due_date
    assignee_ids: $assignee_ids
    label_ids: $label_ids
    fields_attributes: $fields_attributes
    parent_ids: $parent_ids
  }) {
    card {
      id
      title
      due_date
      created_at
      current_phase { id name }
      assignees { id username }
      labels { id name }
      fields { name value phase_field { id } }
    }
  }
}",
    params: &[
        req("pipe_id", Id),
        req("title", String),
        opt("phase_id", Id),
        opt("due_date", DateTime),
        opt("assignee_ids", IdList),
        opt("label_ids", IdList),
        opt("fields_attributes", ObjectList),
        opt("parent_ids", IdList),
    ],
};

pub const UPDATE_CARD: OperationSpec = OperationSpec {
    name: "updateCard",
    kind: OperationKind::Mutation,
    root_field: "updateCard",
    document: r"mutation updateCard($id: ID!, $title: String, $due_date: DateTime, $assignee_ids: [ID], $label_ids: [ID]) {
  updateCard(input: {
    id: $id
    title: $title
    due_date: $due_date
    assignee_ids: $assignee_ids
    label_ids: $label_ids
  }) {
    card {
      id
      title
      due_date
      current_phase { id name }
      assignees { id username }
      labels { id name }
    }
  }
}",
    params: &[
        req("id", Id),
        opt("title", String),
        opt("due_date", DateTime),
        opt("assignee_ids", IdList),
        opt("label_ids", IdList),
    ],
};

pub const DELETE_CARD: OperationSpec = OperationSpec {
    name: "deleteCard",
    kind: OperationKind::Mutation,
    root_field: "deleteCard",
    document: r"mutation deleteCard($id: ID!) {
  deleteCard(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

pub const MOVE_CARD_TO_PHASE: OperationSpec = OperationSpec {
    name: "moveCardToPhase",
    kind: OperationKind::Mutation,
    root_field: "moveCardToPhase",
    document: r"mutation moveCardToPhase($card_id: ID!, $destination_phase_id: ID!) {
  moveCardToPhase(input: { card_id: $card_id, destination_phase_id: $destination_phase_id }) {
    card {
      id
      title
      current_phase { id name }
    }
  }
}",
    params: &[req("card_id", Id), req("destination_phase_id", Id)],
};

pub const UPDATE_CARD_FIELD: OperationSpec = OperationSpec {
    name: "updateCardField",
    kind: OperationKind::Mutation,
    root_field: "updateCardField",
    document: r"mutation updateCardField($card_id: ID!, $field_id: ID!, $new_value: [UndefinedInput]) {
  updateCardField(input: { card_id: $card_id, field_id: $field_id, new_value: $new_value }) {
    card {
      id
      title
      fields { name value phase_field { id } }
    }
  }
}",
    params: &[req("card_id", Id), req("field_id", Id), req("new_value", Json)],
};

// Comments

pub const CREATE_COMMENT: OperationSpec = OperationSpec {
    name: "createComment",
    kind: OperationKind::Mutation,
    root_field: "createComment",
    document: r"mutation createComment($card_id: ID!, $text: String!) {
  createComment(input: { card_id: $card_id, text: $text }) {
    comment { id text author_name created_at }
  }
}",
    params: &[req("card_id", Id), req("text", String)],
};

pub const UPDATE_COMMENT: OperationSpec = OperationSpec {
    name: "updateComment",
    kind: OperationKind::Mutation,
    root_field: "updateComment",
    document: r"mutation updateComment($id: ID!, $text: String!) {
  updateComment(input: { id: $id, text: $text }) {
    comment { id text author_name created_at }
  }
}",
    params: &[req("id", Id), req("text", String)],
};

pub const DELETE_COMMENT: OperationSpec = OperationSpec {
    name: "deleteComment",
    kind: OperationKind::Mutation,
    root_field: "deleteComment",
    document: r"mutation deleteComment($id: ID!) {
  deleteComment(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Members

pub const SET_ROLE: OperationSpec = OperationSpec {
    name: "setRole",
    kind: OperationKind::Mutation,
    root_field: "setRole",
    document: r"mutation setRole($pipe_id: ID!, $organization_id: ID, $member: MemberInput!) {
  setRole(input: { pipe_id: $pipe_id, organization_id: $organization_id, member: $member }) {
    member { user { id name username } role_name }
  }
}",
    params: &[
        req("pipe_id", Id),
        opt("organization_id", Id),
        req("member", Object),
    ],
};

// Pipe relations

const PIPE_RELATION_RULES: [ParamSpec; 7] = [
    opt("child_must_exist_to_move_parent", Boolean),
    opt("child_must_exist_to_finish_parent", Boolean),
    opt("all_children_must_be_done_to_finish_parent", Boolean),
    opt("all_children_must_be_done_to_move_parent", Boolean),
    opt("can_create_connected_cards", Boolean),
    opt("can_search_connected_cards", Boolean),
    opt("can_connect_multiple_cards", Boolean),
];

pub const CREATE_PIPE_RELATION: OperationSpec = OperationSpec {
    name: "createPipeRelation",
    kind: OperationKind::Mutation,
    root_field: "createPipeRelation",
    document: r"mutation createPipeRelation($parent_id: ID!, $child_id: ID!, $name: String!, $child_must_exist_to_move_parent: Boolean, $child_must_exist_to_finish_parent: Boolean, $all_children_must_be_done_to_finish_parent: Boolean, $all_children_must_be_done_to_move_parent: Boolean, $can_create_connected_cards: Boolean, $can_search_connected_cards: Boolean, $can_connect_multiple_cards: Boolean) {
  createPipeRelation(input: {
    parent_id: $parent_id
    child_id: $child_id
    name: $name
    child_must_exist_to_move_parent: $child_must_exist_to_move_parent
    child_must_exist_to_finish_parent: $child_must_exist_to_finish_parent
    all_children_must_be_done_to_finish_parent: $all_children_must_be_done_to_finish_parent
    all_children_must_be_done_to_move_parent: $all_children_must_be_done_to_move_parent
    can_create_connected_cards: $can_create_connected_cards
    can_search_connected_cards: $can_search_connected_cards
    can_connect_multiple_cards: $can_connect_multiple_cards
  }) {
    pipeRelation {
      id
      name
      parent_id
      child_id
      child_must_exist_to_move_parent
      child_must_exist_to_finish_parent
      all_children_must_be_done_to_finish_parent
      all_children_must_be_done_to_move_parent
      can_create_connected_cards
      can_search_connected_cards
      can_connect_multiple_cards
    }
  }
}",
    params: &[
        req("parent_id", Id),
        req("child_id", Id),
        req("name", String),
        PIPE_RELATION_RULES[0],
        PIPE_RELATION_RULES[1],
        PIPE_RELATION_RULES[2],
        PIPE_RELATION_RULES[3],
        PIPE_RELATION_RULES[4],
        PIPE_RELATION_RULES[5],
        PIPE_RELATION_RULES[6],
    ],
};

pub const UPDATE_PIPE_RELATION: OperationSpec = OperationSpec {
    name: "updatePipeRelation",
    kind: OperationKind::Mutation,
    root_field: "updatePipeRelation",
    document: r"mutation updatePipeRelation($id: ID!, $name: String!, $child_must_exist_to_move_parent: Boolean, $child_must_exist_to_finish_parent: Boolean, $all_children_must_be_done_to_finish_parent: Boolean, $all_children_must_be_done_to_move_parent: Boolean, $can_create_connected_cards: Boolean, $can_search_connected_cards: Boolean, $can_connect_multiple_cards: Boolean) {
  updatePipeRelation(input: {
    id: $id
    name: $name
    child_must_exist_to_move_parent: $child_must_exist_to_move_parent
    child_must_exist_to_finish_parent: $child_must_exist_to_finish_parent
    all_children_must_be_done_to_finish_parent: $all_children_must_be_done_to_finish_parent
    all_children_must_be_done_to_move_parent: $all_children_must_be_done_to_move_parent
    can_create_connected_cards: $can_create_connected_cards
    can_search_connected_cards: $can_search_connected_cards
    can_connect_multiple_cards: $can_connect_multiple_cards
  }) {
    pipeRelation {
      id
      name
      child_must_exist_to_move_parent
      child_must_exist_to_finish_parent
      all_children_must_be_done_to_finish_parent
      all_children_must_be_done_to_move_parent
      can_create_connected_cards
      can_search_connected_cards
      can_connect_multiple_cards
    }
  }
}",
    params: &[
        req("id", Id),
        req("name", String),
        PIPE_RELATION_RULES[0],
        PIPE_RELATION_RULES[1],
        PIPE_RELATION_RULES[2],
        PIPE_RELATION_RULES[3],
        PIPE_RELATION_RULES[4],
        PIPE_RELATION_RULES[5],
        PIPE_RELATION_RULES[6],
    ],
};

pub const DELETE_PIPE_RELATION: OperationSpec = OperationSpec {
    name: "deletePipeRelation",
    kind: OperationKind::Mutation,
    root_field: "deletePipeRelation",
    document: r"mutation deletePipeRelation($id: ID!) {
  deletePipeRelation(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};

// Webhooks

pub const CREATE_WEBHOOK: OperationSpec = OperationSpec {
    name: "createWebhook",
    kind: OperationKind::Mutation,
    root_field: "createWebhook",
    document: r"mutation createWebhook($pipe_id: ID!, $name: String!, $url: String!, $actions: [String]!, $email: String, $headers: Json) {
  createWebhook(input: {
    pipe_id: $pipe_id
    name: $name
    url: $url
    actions: $actions
    email: $email
    headers: $headers
  }) {
    webhook { id name url email actions headers }
  }
}",
    params: &[
        req("pipe_id", Id),
        req("name", String),
        req("url", String),
        req("actions", StringList),
        opt("email", String),
        opt("headers", Json),
    ],
};

pub const UPDATE_WEBHOOK: OperationSpec = OperationSpec {
    name: "updateWebhook",
    kind: OperationKind::Mutation,
    root_field: "updateWebhook",
    document: r"mutation updateWebhook($id: ID!, $name: String, $url: String, $email: String, $actions: [String], $headers: Json) {
  updateWebhook(input: {
    id: $id
    name: $name
    url: $url
    email: $email
    actions: $actions
    headers: $headers
  }) {
    webhook { id name url email actions headers }
  }
}",
    params: &[
        req("id", Id),
        opt("name", String),
        opt("url", String),
        opt("email", String),
        opt("actions", StringList),
        opt("headers", Json),
    ],
};

pub const DELETE_WEBHOOK: OperationSpec = OperationSpec {
    name: "deleteWebhook",
    kind: OperationKind::Mutation,
    root_field: "deleteWebhook",
    document: r"mutation deleteWebhook($id: ID!) {
  deleteWebhook(input: { id: $id }) { success }
}",
    params: ID_ONLY,
};
