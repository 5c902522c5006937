//! Read-only operations.

use super::ParamShape::{Id, IdList, Int, String};
use super::{OperationKind, OperationSpec, ParamSpec};

/// The authenticated user.
pub const GET_ME: OperationSpec = OperationSpec {
    name: "getMe",
    kind: OperationKind::Query,
    root_field: "me",
    document: r"query getMe {
  me {
    id
    name
    username
    email
    avatarUrl
    created_at
    locale
    timeZone
  }
}",
    params: &[],
};

pub const LIST_ORGANIZATIONS: OperationSpec = OperationSpec {
    name: "listOrganizations",
    kind: OperationKind::Query,
    root_field: "organizations",
    document: r"query listOrganizations($ids: [ID]) {
  organizations(ids: $ids) {
    id
    name
    created_at
    members { user { id name } role_name }
    only_admin_can_create_pipes
    only_admin_can_invite_users
    force_omniauth_to_normal_users
    pipes { id name }
    tables { edges { node { id name } } }
  }
}",
    params: &[ParamSpec::optional("ids", IdList)],
};

pub const GET_ORGANIZATION_BY_ID: OperationSpec = OperationSpec {
    name: "showOrganization",
    kind: OperationKind::Query,
    root_field: "organization",
    document: r"query showOrganization($id: ID!) {
  organization(id: $id) {
    id
    name
    created_at
    members { user { id name } role_name }
    only_admin_can_create_pipes
    only_admin_can_invite_users
    force_omniauth_to_normal_users
    pipes { id name phases { id name } }
    tables { edges { node { id name } } }
  }
}",
    params: &[ParamSpec::required("id", Id)],
};

pub const LIST_PIPES: OperationSpec = OperationSpec {
    name: "listPipes",
    kind: OperationKind::Query,
    root_field: "pipes",
    document: r"query listPipes($ids: [ID]!, $cardsFirst: Int) {
  pipes(ids: $ids) {
    id
    name
    phases {
      id
      name
      cards(first: $cardsFirst) { edges { node { id title } } }
    }
  }
}",
    params: &[
        ParamSpec::required("ids", IdList),
        ParamSpec::optional("cardsFirst", Int),
    ],
};

pub const GET_PIPE_BY_ID: OperationSpec = OperationSpec {
    name: "showPipe",
    kind: OperationKind::Query,
    root_field: "pipe",
    document: r"query showPipe($id: ID!, $cardsFirst: Int) {
  pipe(id: $id) {
    id
    name
    icon
    public
    public_form
    only_assignees_can_edit_cards
    only_admin_can_remove_cards
    anyone_can_create_card
    cards_count
    title_field { id synced_with_card }
    start_form_fields { id label type required }
    labels { id name color }
    members { user { id name } role_name }
    phases {
      id
      name
      done
      cards_count
      fields { id label type }
      cards(first: $cardsFirst) { edges { node { id title } } }
    }
  }
}",
    params: &[
        ParamSpec::required("id", Id),
        ParamSpec::optional("cardsFirst", Int),
    ],
};

pub const GET_PHASE_BY_ID: OperationSpec = OperationSpec {
    name: "getPhaseById",
    kind: OperationKind::Query,
    root_field: "phase",
    document: r"query getPhaseById($id: ID!, $cardsFirst: Int) {
  phase(id: $id) {
    id
    name
    description
    done
    cards_count
    cards(first: $cardsFirst) { edges { node { id title } } }
    fields { id label type required editable }
    cards_can_be_moved_to_phases { id name }
  }
}",
    params: &[
        ParamSpec::required("id", Id),
        ParamSpec::optional("cardsFirst", Int),
    ],
};

/// One page of a pipe's cards. Pass `pageInfo.endCursor` as `after` for the
/// next page.
pub const GET_CARDS_BY_PIPE_ID: OperationSpec = OperationSpec {
    name: "getCardsByPipeId",
    kind: OperationKind::Query,
    root_field: "cards",
    document: r"query getCardsByPipeId($pipe_id: ID!, $first: Int, $after: String) {
  cards(pipe_id: $pipe_id, first: $first, after: $after) {
    pageInfo { hasNextPage endCursor }
    edges {
      cursor
      node {
        id
        title
        due_date
        created_at
        current_phase { id name }
        assignees { id username }
        labels { id name }
        child_relations { name cards { id } }
        fields { name value phase_field { id } }
      }
    }
  }
}",
    params: &[
        ParamSpec::required("pipe_id", Id),
        ParamSpec::optional("first", Int),
        ParamSpec::optional("after", String),
    ],
};

pub const GET_CARD_BY_ID: OperationSpec = OperationSpec {
    name: "getCardById",
    kind: OperationKind::Query,
    root_field: "card",
    document: r"query getCardById($id: ID!) {
  card(id: $id) {
    id
    title
    due_date
    created_at
    current_phase { id name }
    pipe { id name }
    assignees { id username }
    labels { id name color }
    child_relations { name cards { id title } }
    fields { name value phase_field { id } }
  }
}",
    params: &[ParamSpec::required("id", Id)],
};

pub const GET_PIPE_RELATION_BY_IDS: OperationSpec = OperationSpec {
    name: "getPipeRelationByIds",
    kind: OperationKind::Query,
    root_field: "pipe_relations",
    document: r"query getPipeRelationByIds($ids: [ID]!) {
  pipe_relations(ids: $ids) {
    id
    name
    parent_id
    child_id
    child_name
    child_must_exist_to_move_parent
    child_must_exist_to_finish_parent
    all_children_must_be_done_to_finish_parent
    all_children_must_be_done_to_move_parent
    can_create_connected_cards
    can_search_connected_cards
    can_connect_multiple_cards
  }
}",
    params: &[ParamSpec::required("ids", IdList)],
};
